//! Parent/child index over response ids and the subtree sizes derived from it.

use std::collections::HashMap;

use crate::error::{TranscriptError, TranscriptResult};
use crate::models::Response;

/// Parent id → child ids, in the order the children appear in the input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchTree {
    children: HashMap<String, Vec<String>>,
}

impl BranchTree {
    /// Build the index in a single pass; children may precede their parents in the input
    pub fn build(responses: &[Response]) -> Self {
        let mut children: HashMap<String, Vec<String>> = HashMap::new();
        for response in responses {
            if let Some(parent_id) = response.parent_id.as_deref()
                && !parent_id.is_empty()
            {
                children.entry(parent_id.to_string()).or_default().push(response.id.clone());
            }
        }
        Self { children }
    }

    pub fn children(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// A response with two or more direct replies
    pub fn is_branch_point(&self, id: &str) -> bool {
        self.children(id).len() >= 2
    }

    /// Total number of parent → child links
    pub fn edge_count(&self) -> usize {
        self.children.values().map(Vec::len).sum()
    }
}

#[derive(Debug, Clone, Copy)]
enum Visit {
    InProgress,
    Done(usize),
}

/// Count of each response plus all of its transitive replies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtreeSizes {
    sizes: HashMap<String, usize>,
}

impl SubtreeSizes {
    /// Compute sizes for every response with an explicit-stack post-order walk
    ///
    /// Every node is resolved exactly once, so the walk is linear in the number of
    /// responses and has no depth limit.
    ///
    /// # Errors
    ///
    /// Returns [`TranscriptError::CyclicBranchStructure`] if a node is reached again
    /// while its own subtree is still being resolved.
    pub fn compute(tree: &BranchTree, responses: &[Response]) -> TranscriptResult<Self> {
        let mut state: HashMap<&str, Visit> = HashMap::with_capacity(responses.len());

        for response in responses {
            let root = response.id.as_str();
            if state.contains_key(root) {
                continue;
            }

            // (node, index of next child to visit)
            let mut stack: Vec<(&str, usize)> = vec![(root, 0)];
            state.insert(root, Visit::InProgress);

            while let Some(frame) = stack.last_mut() {
                let node = frame.0;
                let kids = tree.children(node);

                if frame.1 < kids.len() {
                    let child = kids[frame.1].as_str();
                    frame.1 += 1;
                    match state.get(child) {
                        Some(Visit::Done(_)) => {}
                        Some(Visit::InProgress) => {
                            return Err(TranscriptError::CyclicBranchStructure(child.to_string()));
                        }
                        None => {
                            state.insert(child, Visit::InProgress);
                            stack.push((child, 0));
                        }
                    }
                } else {
                    let size = 1 + kids
                        .iter()
                        .map(|kid| match state.get(kid.as_str()) {
                            Some(Visit::Done(n)) => *n,
                            _ => 0,
                        })
                        .sum::<usize>();
                    state.insert(node, Visit::Done(size));
                    stack.pop();
                }
            }
        }

        let sizes = state
            .into_iter()
            .filter_map(|(id, visit)| match visit {
                Visit::Done(n) => Some((id.to_string(), n)),
                Visit::InProgress => None,
            })
            .collect();

        Ok(Self { sizes })
    }

    pub fn get(&self, id: &str) -> Option<usize> {
        self.sizes.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}
