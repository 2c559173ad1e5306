use sr_core::LocaleResourceNode;

/// Orders siblings by name at every depth.
///
/// Names compare ordinally (byte-wise, case-sensitive) so the exported order
/// never depends on the host locale. The sort is stable, which keeps
/// duplicate names in source order and makes the pass idempotent.
pub fn sort_resources(resources: &mut [LocaleResourceNode]) {
    resources.sort_by(|left, right| left.name.as_bytes().cmp(right.name.as_bytes()));
    for resource in resources.iter_mut() {
        sort_resources(&mut resource.children);
    }
}
