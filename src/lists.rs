//! Singly linked list exercises
//!
//! Lists that own their nodes are `Option<Box<ListNode>>`. Questions about
//! shared structure (cycles, overlapping lists) cannot be expressed with
//! owned nodes, and use the index-based [`ListArena`] instead.

use simple_error::SimpleError;

use crate::base::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub value: Value,
    pub next: List,
}

pub type List = Option<Box<ListNode>>;

impl ListNode {
    pub fn new(value: Value) -> Self {
        Self { value, next: None }
    }
}

/// Builds a list holding the values in order
pub fn from_slice(values: &[Value]) -> List {
    values
        .iter()
        .rev()
        .fold(None, |next, &value| Some(Box::new(ListNode { value, next })))
}

/// Iterates over the values of a list
pub fn iter(list: &List) -> impl Iterator<Item = Value> + '_ {
    std::iter::successors(list.as_deref(), |node| node.next.as_deref()).map(|node| node.value)
}

pub fn to_vec(list: &List) -> Vec<Value> {
    iter(list).collect()
}

pub fn length(list: &List) -> usize {
    iter(list).count()
}

/// Returns the link that holds the node at `index` (0-based), or the last
/// link if the list is shorter
fn link_at(mut link: &mut List, index: usize) -> &mut List {
    for _ in 0..index {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/**
 * EPIJ 7.1 Merge two sorted lists
 *
 * Time Complexity: O(n+m)
 * Space Complexity: O(1) reusing nodes
 */
pub fn merge_two_sorted_lists(mut l1: List, mut l2: List) -> List {
    let mut head: List = None;
    let mut tail = &mut head;

    loop {
        let from_first = match (&l1, &l2) {
            (Some(a), Some(b)) => a.value <= b.value,
            _ => break,
        };
        let source = if from_first { &mut l1 } else { &mut l2 };
        if let Some(mut node) = source.take() {
            *source = node.next.take();
            tail = &mut tail.insert(node).next;
        }
    }

    // At most one list is not exhausted
    *tail = l1.or(l2);
    head
}

/// Reverses a list in place
///
/// Time Complexity: O(n)
/// Space Complexity: O(1)
pub fn reverse_list(head: List) -> List {
    let mut previous = None;
    let mut current = head;

    while let Some(mut node) = current {
        current = node.next.take();
        node.next = previous;
        previous = Some(node);
    }
    previous
}

pub fn reverse_list_recursive(head: List) -> List {
    fn reverse(previous: List, current: List) -> List {
        match current {
            None => previous,
            Some(mut node) => {
                let next = node.next.take();
                node.next = previous;
                reverse(Some(node), next)
            }
        }
    }
    reverse(None, head)
}

/// Reverses a list by first collecting its nodes
///
/// Space Complexity: O(n)
pub fn reverse_list_with_stack(head: List) -> List {
    let mut nodes = Vec::new();
    let mut current = head;
    while let Some(mut node) = current {
        current = node.next.take();
        nodes.push(node);
    }

    let mut previous = None;
    for mut node in nodes {
        node.next = previous;
        previous = Some(node);
    }
    previous
}

/**
 * EPIJ 7.2: Reverse a single sublist within a list
 *
 * Positions are 1-based and inclusive: reversing 2..=4 of
 * A -> B -> C -> D -> E gives A -> D -> C -> B -> E. The sublist is detached,
 * reversed, and spliced back.
 *
 * Time Complexity: Dominated by the search for the finish node i.e. O(f)
 * Space Complexity: O(1)
 */
pub fn reverse_sublist(head: List, start: usize, finish: usize) -> Result<List, SimpleError> {
    if start == 0 || start > finish {
        return Err(SimpleError::new(format!(
            "invalid sublist {}..={} (positions start at 1)",
            start, finish
        )));
    }
    if start == finish {
        return Ok(head);
    }
    let len = length(&head);
    if finish > len {
        return Err(SimpleError::new(format!(
            "sublist {}..={} goes past the end of the list ({})",
            start, finish, len
        )));
    }

    let mut head = head;
    let link = link_at(&mut head, start - 1);

    let mut rest = link.take();
    let mut reversed: List = None;
    for _ in start..=finish {
        if let Some(mut node) = rest.take() {
            rest = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
    }

    // The first node of the sublist is now its last one
    let tail = link_at(&mut reversed, finish - start);
    if let Some(node) = tail {
        node.next = rest;
    }
    *link = reversed;

    Ok(head)
}

/**
 * EPIJ 7.7: Remove the k-th last element from a list
 *
 * k = 1 is the last element; the list is unchanged if k is 0 or larger
 * than the length.
 *
 * TIME COMPLEXITY: O(n) length of the list
 * SPACE COMPLEXITY: O(1)
 */
pub fn remove_kth_last(head: List, k: usize) -> List {
    let len = length(&head);
    if k == 0 || k > len {
        return head;
    }

    let mut head = head;
    let link = link_at(&mut head, len - k);
    if let Some(mut node) = link.take() {
        *link = node.next.take();
    }
    head
}

/**
 * EPIJ 7.8: Remove duplicates from a sorted list
 *
 * Time Complexity: O(n)
 * Space Complexity: O(1)
 */
pub fn remove_duplicates_sorted(head: List) -> List {
    let mut head = head;
    let mut current = head.as_mut();

    while let Some(node) = current {
        let value = node.value;
        while let Some(mut duplicate) = node.next.take() {
            if duplicate.value != value {
                node.next = Some(duplicate);
                break;
            }
            node.next = duplicate.next.take();
        }
        current = node.next.as_mut();
    }
    head
}

/// Index of a node within a [`ListArena`]
pub type NodeRef = usize;

/// Nodes stored in a vector and linked by index, so that several lists can
/// share nodes and a list can loop back on itself
#[derive(Debug, Default, Clone)]
pub struct ListArena {
    values: Vec<Value>,
    next: Vec<Option<NodeRef>>,
}

impl ListArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Adds an unlinked node
    pub fn push(&mut self, value: Value) -> NodeRef {
        self.values.push(value);
        self.next.push(None);
        self.values.len() - 1
    }

    /// Adds a chain of nodes and returns its head
    pub fn chain(&mut self, values: &[Value]) -> Option<NodeRef> {
        let nodes: Vec<NodeRef> = values.iter().map(|&value| self.push(value)).collect();
        for pair in nodes.windows(2) {
            self.next[pair[0]] = Some(pair[1]);
        }
        nodes.first().copied()
    }

    /// Sets the successor of `from`
    pub fn link(&mut self, from: NodeRef, to: Option<NodeRef>) -> Result<(), SimpleError> {
        if let Some(to) = to {
            if to >= self.len() {
                return Err(SimpleError::new(format!("unknown node {}", to)));
            }
        }
        match self.next.get_mut(from) {
            Some(next) => {
                *next = to;
                Ok(())
            }
            None => Err(SimpleError::new(format!("unknown node {}", from))),
        }
    }

    pub fn next(&self, node: NodeRef) -> Option<NodeRef> {
        self.next.get(node).copied().flatten()
    }

    pub fn value(&self, node: NodeRef) -> Option<Value> {
        self.values.get(node).copied()
    }

    /**
     * EPIJ 7.3 Test for Cyclicity
     *
     * Brute force uses a hash set and O(n) additional space. With a slow and
     * a fast iterator, the list has a cycle if and only if they meet.
     *
     * Time Complexity: O(n)
     * Space Complexity: O(1)
     */
    pub fn has_cycle(&self, head: Option<NodeRef>) -> bool {
        let (mut slow, mut fast) = (head, head);
        loop {
            fast = match fast.and_then(|n| self.next(n)).and_then(|n| self.next(n)) {
                Some(node) => Some(node),
                None => return false,
            };
            slow = slow.and_then(|n| self.next(n));
            if slow == fast {
                return true;
            }
        }
    }

    /// Last node of a list, or None if the list is empty or has a cycle
    pub fn tail(&self, head: Option<NodeRef>) -> Option<NodeRef> {
        let mut current = head?;
        // A walk longer than the arena means a cycle
        for _ in 0..self.len() {
            match self.next(current) {
                Some(next) => current = next,
                None => return Some(current),
            }
        }
        None
    }

    /**
     * EPIJ 7.4: Test for overlapping lists (lists are cycle free)
     *
     * Once two lists converge at a node they cannot diverge at a later one,
     * so they overlap if and only if they have the same tail node.
     *
     * Time Complexity: O(n) Space Complexity: O(1)
     */
    pub fn lists_overlap(&self, a: Option<NodeRef>, b: Option<NodeRef>) -> bool {
        match (self.tail(a), self.tail(b)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_merge_two_sorted_lists() {
        let merged = merge_two_sorted_lists(from_slice(&[1, 3, 5]), from_slice(&[2, 4, 6, 8, 9]));
        assert_eq!(to_vec(&merged), vec![1, 2, 3, 4, 5, 6, 8, 9]);

        let merged = merge_two_sorted_lists(from_slice(&[1, 2, 2]), from_slice(&[2, 3]));
        assert_eq!(to_vec(&merged), vec![1, 2, 2, 2, 3]);

        let merged = merge_two_sorted_lists(None, from_slice(&[1, 2]));
        assert_eq!(to_vec(&merged), vec![1, 2]);

        assert_eq!(merge_two_sorted_lists(None, None), None);
    }

    #[rstest]
    #[case::iterative(reverse_list)]
    #[case::recursive(reverse_list_recursive)]
    #[case::stack(reverse_list_with_stack)]
    fn test_reverse(#[case] reverse: fn(List) -> List) {
        assert_eq!(to_vec(&reverse(from_slice(&[1, 2, 3, 4]))), vec![4, 3, 2, 1]);
        assert_eq!(to_vec(&reverse(from_slice(&[1, 2, 2, 3]))), vec![3, 2, 2, 1]);
        assert_eq!(to_vec(&reverse(from_slice(&[1, 2]))), vec![2, 1]);
        assert_eq!(to_vec(&reverse(from_slice(&[1]))), vec![1]);
        assert_eq!(reverse(None), None);
    }

    #[test]
    fn test_reverse_sublist() {
        let list = reverse_sublist(from_slice(&[1, 2, 3, 4, 5]), 2, 4).unwrap();
        assert_eq!(to_vec(&list), vec![1, 4, 3, 2, 5]);

        let list = reverse_sublist(from_slice(&[1, 2]), 1, 2).unwrap();
        assert_eq!(to_vec(&list), vec![2, 1]);

        let list = reverse_sublist(from_slice(&[1, 2, 2, 3]), 2, 3).unwrap();
        assert_eq!(to_vec(&list), vec![1, 2, 2, 3]);

        let list = reverse_sublist(from_slice(&[1, 2, 3]), 2, 3).unwrap();
        assert_eq!(to_vec(&list), vec![1, 3, 2]);

        assert_eq!(reverse_sublist(from_slice(&[1]), 1, 1).unwrap(), from_slice(&[1]));
        assert_eq!(reverse_sublist(None, 1, 1).unwrap(), None);
    }

    #[test]
    fn test_reverse_sublist_out_of_range() {
        assert!(reverse_sublist(from_slice(&[1, 2]), 0, 1).is_err());
        assert!(reverse_sublist(from_slice(&[1, 2]), 2, 1).is_err());
        assert!(reverse_sublist(from_slice(&[1, 2]), 1, 3).is_err());
    }

    #[test]
    fn test_remove_kth_last() {
        assert_eq!(to_vec(&remove_kth_last(from_slice(&[1, 2, 3, 4]), 2)), vec![1, 2, 4]);
        assert_eq!(to_vec(&remove_kth_last(from_slice(&[1, 2]), 1)), vec![1]);
        assert_eq!(to_vec(&remove_kth_last(from_slice(&[1, 2]), 2)), vec![2]);
        assert_eq!(remove_kth_last(from_slice(&[1]), 1), None);
        assert_eq!(remove_kth_last(None, 1), None);
        assert_eq!(to_vec(&remove_kth_last(from_slice(&[1, 2]), 3)), vec![1, 2]);
        assert_eq!(to_vec(&remove_kth_last(from_slice(&[1, 2]), 0)), vec![1, 2]);
    }

    #[test]
    fn test_remove_duplicates() {
        let list = remove_duplicates_sorted(from_slice(&[1, 1, 2, 3, 3, 3, 4]));
        assert_eq!(to_vec(&list), vec![1, 2, 3, 4]);
        assert_eq!(to_vec(&remove_duplicates_sorted(from_slice(&[5, 5]))), vec![5]);
        assert_eq!(remove_duplicates_sorted(None), None);
    }

    #[test]
    fn test_has_cycle() {
        let mut arena = ListArena::new();
        let head = arena.chain(&[1, 2, 3, 4]);
        assert!(!arena.has_cycle(head));

        // 4 -> 2
        arena.link(3, Some(1)).unwrap();
        assert!(arena.has_cycle(head));

        // Single node pointing to itself
        let single = arena.push(7);
        arena.link(single, Some(single)).unwrap();
        assert!(arena.has_cycle(Some(single)));

        // Two nodes pointing to each other
        let pair = arena.chain(&[1, 1]);
        arena.link(pair.unwrap() + 1, pair).unwrap();
        assert!(arena.has_cycle(pair));

        assert!(!arena.has_cycle(None));
        assert!(arena.link(100, None).is_err());
    }

    #[test]
    fn test_lists_overlap() {
        let mut arena = ListArena::new();
        let shared = arena.chain(&[7, 8, 9]);
        let a = arena.chain(&[1, 2]);
        let b = arena.chain(&[3]);
        let c = arena.chain(&[4, 5]);

        // a: 1 -> 2 -> 7 -> 8 -> 9, b: 3 -> 7 -> 8 -> 9
        arena.link(a.unwrap() + 1, shared).unwrap();
        arena.link(b.unwrap(), shared).unwrap();

        assert!(arena.lists_overlap(a, b));
        assert!(!arena.lists_overlap(a, c));
        assert!(!arena.lists_overlap(a, None));
        assert_eq!(arena.value(arena.tail(b).unwrap()), Some(9));
    }
}
