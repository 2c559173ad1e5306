use std::collections::BTreeSet;

/// Lowercase ASCII slug: alphanumerics kept, every other run becomes one `-`.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_dash = false;

    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(ch.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    slug
}

/// Hands out slugs unique within one table by appending `-2`, `-3`, ...
#[derive(Debug, Default)]
pub struct SlugAllocator {
    taken: BTreeSet<String>,
}

impl SlugAllocator {
    pub fn allocate(&mut self, text: &str) -> String {
        let base = slugify(text);
        let base = if base.is_empty() { "item".to_string() } else { base };

        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut suffix = 2usize;
        loop {
            let candidate = format!("{}-{}", base, suffix);
            if self.taken.insert(candidate.clone()) {
                return candidate;
            }
            suffix += 1;
        }
    }
}
