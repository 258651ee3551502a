//! Elective group (track) resolution: explicit mapping first, then prefix ranges.

use crate::models::{Catalog, CourseCodeId, GroupId, SubcategoryId};

/// Resolver bound to one request's catalog and the curriculum's elective subcategory.
pub struct GroupResolver<'a> {
    catalog: &'a Catalog,
    elective_subcategory_id: Option<SubcategoryId>,
}

impl<'a> GroupResolver<'a> {
    pub fn new(catalog: &'a Catalog, elective_subcategory_id: Option<SubcategoryId>) -> Self {
        Self {
            catalog,
            elective_subcategory_id,
        }
    }

    /// `None` when no override exists and the code cannot be placed in any range.
    pub fn resolve(&self, course_code_id: CourseCodeId, course_code: &str) -> Option<GroupId> {
        if let Some(group) = self.catalog.group_overrides.get(&course_code_id) {
            return Some(*group);
        }

        let subcategory_id = self.elective_subcategory_id?;
        let (prefix, number) = split_code(course_code)?;

        self.catalog
            .code_ranges
            .iter()
            .find(|r| {
                r.subcategory_id == subcategory_id
                    && r.prefix.eq_ignore_ascii_case(&prefix)
                    && (r.number_start..=r.number_end).contains(&number)
            })
            .map(|r| r.group_id)
    }
}

/// Splits `<letters><digits>` into (uppercase prefix, number). Any other shape yields `None`.
pub fn split_code(code: &str) -> Option<(String, u32)> {
    let code = code.trim();
    let split_at = code.find(|c: char| !c.is_ascii_alphabetic())?;
    let (prefix, digits) = code.split_at(split_at);

    if prefix.is_empty() || digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let number = digits.parse::<u32>().ok()?;
    Some((prefix.to_ascii_uppercase(), number))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CodeRange;

    #[test]
    fn split_code_shapes() {
        assert_eq!(split_code("cs3301"), Some(("CS".to_string(), 3301)));
        assert_eq!(split_code(" ITE4100 "), Some(("ITE".to_string(), 4100)));
        assert_eq!(split_code("CS-3301"), None);
        assert_eq!(split_code("3301"), None);
        assert_eq!(split_code("CS"), None);
        assert_eq!(split_code("CS33A"), None);
    }

    #[test]
    fn override_beats_range() {
        let mut catalog = Catalog::default();
        catalog.group_overrides.insert(7, 1);
        catalog.code_ranges.push(CodeRange {
            subcategory_id: 20,
            prefix: "cs".to_string(),
            number_start: 4000,
            number_end: 4099,
            group_id: 2,
        });

        let resolver = GroupResolver::new(&catalog, Some(20));
        assert_eq!(resolver.resolve(7, "CS4010"), Some(1));
        assert_eq!(resolver.resolve(8, "CS4010"), Some(2));
        assert_eq!(resolver.resolve(8, "CS4100"), None);

        let no_subcategory = GroupResolver::new(&catalog, None);
        assert_eq!(no_subcategory.resolve(8, "CS4010"), None);
        assert_eq!(no_subcategory.resolve(7, "CS4010"), Some(1));
    }
}
