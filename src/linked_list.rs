use std::fmt;

use crate::error::{ParseListError, Result};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ListNode {
    pub next: Option<Box<ListNode>>,
    pub val: i32,
}

/// Borrowing iterator over the values of a chain, head first.
pub struct Iter<'a> {
    next: Option<&'a ListNode>,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { next: None, val }
    }

    pub fn from_vec(vec: Vec<i32>) -> Option<Box<Self>> {
        let mut head = None;

        for &val in vec.iter().rev() {
            let mut current = ListNode::new(val);
            current.next = head;
            head = Some(Box::new(current));
        }
        head
    }

    pub fn into_vec(mut head: Option<Box<ListNode>>) -> Vec<i32> {
        let mut vec: Vec<i32> = Vec::new();

        while let Some(mut curr) = head {
            vec.push(curr.val);
            head = curr.next.take();
        }
        vec
    }

    /// Parses the `[1,4,3]` notation. `[]` yields the empty list.
    pub fn parse_list(s: &str) -> Result<Option<Box<Self>>> {
        let inner = s
            .trim()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(ParseListError::MissingBrackets)?;

        if inner.trim().is_empty() {
            return Ok(None);
        }

        let values = inner
            .split(',')
            .enumerate()
            .map(|(index, item)| {
                item.trim()
                    .parse::<i32>()
                    .map_err(|source| ParseListError::InvalidValue { index, source })
            })
            .collect::<Result<Vec<i32>>>()?;

        Ok(Self::from_vec(values))
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { next: Some(self) }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            node.val
        })
    }
}

impl fmt::Display for ListNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, val) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{val}")?;
        }
        write!(f, "]")
    }
}

// the default drop recurses once per node
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();

        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}
