use bevy::prelude::*;

/// Breadth-first search for a named entity below `root`, e.g. a skeleton bone.
pub fn find_named_descendant(
    root: Entity,
    name: &str,
    children_query: &Query<&Children>,
    names: &Query<&Name>,
) -> Option<Entity> {
    let mut queue = std::collections::VecDeque::from([root]);
    while let Some(entity) = queue.pop_front() {
        if entity != root && names.get(entity).is_ok_and(|n| n.as_str() == name) {
            return Some(entity);
        }
        if let Ok(children) = children_query.get(entity) {
            queue.extend(children.iter());
        }
    }
    None
}
