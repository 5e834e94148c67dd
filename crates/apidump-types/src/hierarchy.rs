//! Class inheritance forest built from superclass names.
//!
//! Superclasses are plain names, so the forest is derived on demand. A class
//! whose superclass is empty, names itself, or names no class in the root
//! starts its own tree. Classes caught in an inheritance cycle are broken out
//! at the first member of the cycle in tree order.

use std::collections::{HashMap, HashSet};

use crate::root::Root;

/// A class and the classes that inherit from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HierarchyNode {
    pub name: String,
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    /// Number of nodes in this subtree, including this one.
    pub fn size(&self) -> usize {
        let mut size = 0;
        let mut pending = vec![self];
        while let Some(node) = pending.pop() {
            size += 1;
            pending.extend(&node.children);
        }
        size
    }
}

impl Drop for HierarchyNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

impl Root {
    /// Build the inheritance forest of this snapshot.
    ///
    /// Duplicate class names contribute a single node, using the superclass
    /// of the first occurrence. Children appear in tree order.
    pub fn hierarchy(&self) -> Vec<HierarchyNode> {
        let mut order: Vec<&str> = Vec::new();
        let mut parents: HashMap<&str, &str> = HashMap::new();
        for class in &self.classes {
            if !parents.contains_key(class.name.as_str()) {
                parents.insert(&class.name, &class.superclass);
                order.push(&class.name);
            }
        }

        let mut children: HashMap<&str, Vec<&str>> = HashMap::new();
        for &name in &order {
            if let Some(parent) = resolve_parent(&parents, name) {
                children.entry(parent).or_default().push(name);
            }
        }

        let mut visited = HashSet::new();
        let mut forest = Vec::new();
        for &name in &order {
            if resolve_parent(&parents, name).is_none() {
                forest.push(build(name, &children, &mut visited));
            }
        }
        for &name in &order {
            if !visited.contains(name) {
                forest.push(build(name, &children, &mut visited));
            }
        }
        forest
    }
}

fn resolve_parent<'a>(parents: &HashMap<&'a str, &'a str>, name: &str) -> Option<&'a str> {
    let parent = *parents.get(name)?;
    (parent != name && parents.contains_key(parent)).then_some(parent)
}

/// Depth-first build of the subtree under `name` with an explicit stack, so
/// that inheritance depth is bounded by the heap rather than the call stack.
fn build<'a>(
    name: &'a str,
    children: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
) -> HierarchyNode {
    // Arena of (name, child indices); a child always lands after its parent.
    let mut arena: Vec<(&str, Vec<usize>)> = vec![(name, Vec::new())];
    let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
    visited.insert(name);

    while let Some((node, next)) = stack.last_mut() {
        let kids = children.get(arena[*node].0).map(Vec::as_slice).unwrap_or(&[]);
        let unvisited = kids[*next..].iter().position(|kid| !visited.contains(kid));
        match unvisited {
            Some(offset) => {
                let kid = kids[*next + offset];
                *next += offset + 1;
                let parent = *node;
                visited.insert(kid);
                arena.push((kid, Vec::new()));
                let id = arena.len() - 1;
                arena[parent].1.push(id);
                stack.push((id, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    let mut built: Vec<Option<HierarchyNode>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);
    for (id, (name, kids)) in arena.iter().enumerate().rev() {
        let node = HierarchyNode {
            name: name.to_string(),
            children: kids.iter().filter_map(|&kid| built[kid].take()).collect(),
        };
        built[id] = Some(node);
    }
    built.swap_remove(0).unwrap_or(HierarchyNode {
        name: name.to_string(),
        children: Vec::new(),
    })
}
