use hashbrown::HashSet;

#[derive(Debug, Clone)]
pub struct MemberRecord {
    pub id: i64,
    pub name: String,
    pub badges: HashSet<i32>,
}

impl MemberRecord {
    /// Flips possession of `badge_id` and returns whether the member
    /// holds the badge afterwards.
    pub fn toggle_badge(&mut self, badge_id: i32) -> bool {
        if self.badges.remove(&badge_id) {
            false
        } else {
            self.badges.insert(badge_id);
            true
        }
    }

    pub fn holds(&self, badge_id: i32) -> bool {
        self.badges.contains(&badge_id)
    }
}

pub fn demo_roster() -> Vec<MemberRecord> {
    [
        (1, "John Doe", &[1, 2][..]),
        (2, "Jane Smith", &[2]),
        (3, "Alice Johnson", &[1]),
        (4, "Bob Williams", &[1, 2]),
        (5, "Charlie Brown", &[2]),
    ]
    .into_iter()
    .map(|(id, name, badges)| MemberRecord {
        id,
        name: name.to_owned(),
        badges: badges.iter().copied().collect(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let mut member = MemberRecord {
            id: 1,
            name: "John Doe".to_owned(),
            badges: HashSet::new(),
        };
        assert!(member.toggle_badge(7));
        assert!(member.holds(7));
        assert!(!member.toggle_badge(7));
        assert!(!member.holds(7));
    }

    #[test]
    fn demo_roster_has_no_duplicate_assignments() {
        for member in demo_roster() {
            let listed = member.badges.len();
            let distinct: HashSet<i32> = member.badges.iter().copied().collect();
            assert_eq!(listed, distinct.len());
        }
    }
}
