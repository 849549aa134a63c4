use log::info;

/// Maximum depth tracked individually, deeper samples are clamped.
const MAX_DEPTH: usize = 255;

/// Depth calculates minimum, maximum, average and percentile of the
/// depths at which a search can fall off the [`OrderedMap`] tree, that
/// is, depth of every absent child position.
///
/// [`OrderedMap`]: crate::OrderedMap
#[derive(Clone, Debug)]
pub struct Depth {
    samples: usize,
    min: usize,
    max: usize,
    total: usize,
    depths: [u64; MAX_DEPTH + 1],
}

impl Depth {
    pub(crate) fn new() -> Depth {
        Default::default()
    }

    pub(crate) fn sample(&mut self, depth: usize) {
        if self.samples == 0 || depth < self.min {
            self.min = depth
        }
        if depth > self.max {
            self.max = depth
        }
        self.samples += 1;
        self.total += depth;
        self.depths[depth.min(MAX_DEPTH)] += 1;
    }

    /// Return number of absent-child positions sampled.
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Return the shallowest sampled depth.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Return the deepest sampled depth.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Return the average depth, rounded down. Zero when nothing was
    /// sampled.
    pub fn mean(&self) -> usize {
        match self.samples {
            0 => 0,
            n => self.total / n,
        }
    }

    /// Return depth as tuple of percentiles, each tuple provides
    /// (percentile, depth), for percentiles between 90 and 100. A depth
    /// is listed when the share of samples at or below it first reaches
    /// a new percentile.
    pub fn percentiles(&self) -> Vec<(u8, usize)> {
        let mut percentiles: Vec<(u8, usize)> = vec![];
        if self.samples == 0 {
            return percentiles;
        }

        let mut acc = 0_u64;
        let iter = self.depths.iter().enumerate().filter(|(_, n)| **n > 0);
        for (depth, n) in iter {
            acc += *n;
            let perc = ((acc as f64 / self.samples as f64) * 100_f64) as u8;
            let fresh = match percentiles.last() {
                Some((prev, _)) => perc > *prev,
                None => perc >= 90,
            };
            if fresh {
                percentiles.push((perc, depth));
            }
        }
        percentiles
    }

    /// Write depth statistics to the log in human readable format.
    pub fn log_summary(&self, prefix: &str) {
        info!(
            "{}depth (min, mean, max): {:?}",
            prefix,
            (self.min, self.mean(), self.max)
        );
        for (perc, depth) in self.percentiles().into_iter() {
            info!("{}  {} percentile = {}", prefix, perc, depth);
        }
    }

    /// Convert depth statistics to JSON format, useful for plotting.
    pub fn json(&self) -> String {
        let ps: Vec<String> = self
            .percentiles()
            .into_iter()
            .map(|(perc, depth)| format!("\"{}\": {}", perc, depth))
            .collect();
        format!(
            "{{ \"samples\": {}, \"min\": {}, \"mean\": {}, \"max\": {}, \"percentiles\": {{ {} }} }}",
            self.samples,
            self.min,
            self.mean(),
            self.max,
            ps.join(", ")
        )
    }
}

impl Default for Depth {
    fn default() -> Self {
        Depth {
            samples: 0,
            min: 0,
            max: 0,
            total: 0,
            depths: [0; MAX_DEPTH + 1],
        }
    }
}
