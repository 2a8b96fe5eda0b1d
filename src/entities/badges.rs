#[derive(Debug, Clone)]
pub struct BadgeRecord {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub rule: String,
}

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=100&width=100";

pub fn demo_catalog() -> Vec<BadgeRecord> {
    vec![
        BadgeRecord {
            id: 1,
            name: "Gold Member".to_owned(),
            description: "Awarded to members with 5 years of continuous membership".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            rule: "TestDate1Year".to_owned(),
        },
        BadgeRecord {
            id: 2,
            name: "Event Organizer".to_owned(),
            description: "For members who have organized 3 or more club events".to_owned(),
            image: PLACEHOLDER_IMAGE.to_owned(),
            rule: "TestDate1Year".to_owned(),
        },
    ]
}
