#[derive(Clone)]
struct RefNode {
    key: i64,
    value: i64,
}

// Reference map for keys in 0..capacity, indexed by key.
struct RefNodes {
    entries: Vec<RefNode>,
}

impl RefNodes {
    fn new(capacity: usize) -> RefNodes {
        let mut entries: Vec<RefNode> = Vec::with_capacity(capacity);
        (0..capacity).for_each(|_| entries.push(RefNode { key: -1, value: 0 }));
        RefNodes { entries }
    }

    fn len(&self) -> usize {
        self.entries.iter().filter(|item| item.key >= 0).count()
    }

    fn find(&self, key: i64) -> Option<i64> {
        let entry = &self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            Some(entry.value)
        }
    }

    fn iter(&self) -> std::vec::IntoIter<(i64, i64)> {
        self.entries
            .iter()
            .filter_map(|item| {
                if item.key < 0 {
                    None
                } else {
                    Some((item.key, item.value))
                }
            })
            .collect::<Vec<(i64, i64)>>()
            .into_iter()
    }

    fn insert(&mut self, key: i64, value: i64) -> bool {
        let entry = &mut self.entries[key as usize];
        let added = entry.key < 0;
        entry.key = key;
        entry.value = value;
        added
    }

    fn remove(&mut self, key: i64) -> Option<i64> {
        let entry = &mut self.entries[key as usize];
        if entry.key < 0 {
            None
        } else {
            entry.key = -1;
            Some(entry.value)
        }
    }
}

fn check_against(map: &OrderedMap<i64, i64>, refns: &RefNodes) {
    assert_eq!(map.len(), refns.len());
    let (mut iter, mut iter_ref) = (map.iter(), refns.iter());
    loop {
        match (iter.next(), iter_ref.next()) {
            (Some(item), Some(ref_item)) => {
                assert_eq!(*item.0, ref_item.0);
                assert_eq!(*item.1, ref_item.1);
            }
            (None, None) => break,
            (Some(item), None) => panic!("invalid item: {:?}", item),
            (None, Some(ref_item)) => panic!("invalid none: {:?}", ref_item),
        }
    }
}
