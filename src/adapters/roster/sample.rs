//! Embedded sample roster used when no roster file is configured.

use once_cell::sync::Lazy;

use crate::domain::member::Member;

use super::yaml_file::parse_roster_yaml;

const SAMPLE_ROSTER_YAML: &str = r#"
members:
  - id: SEDS2024001
    username: john.doe
    name: John Doe
    role: Core Team
    batch: "2024"
    email: john.doe@example.com
    phone: "+91 9876543210"
    department: Computer Science
    profilePhoto: https://via.placeholder.com/150x150/4A90E2/FFFFFF?text=JD
    joinDate: 2024-01-15
    isActive: true
  - id: SEDS2024002
    username: jane.smith
    name: Jane Smith
    role: Tech Team
    batch: "2023"
    email: jane.smith@example.com
    phone: "+91 9876543211"
    department: Electronics
    profilePhoto: https://via.placeholder.com/150x150/E74C3C/FFFFFF?text=JS
    joinDate: 2023-08-20
    isActive: true
  - id: SEDS2024003
    username: mike.johnson
    name: Mike Johnson
    role: Design Team
    batch: "2024"
    email: mike.johnson@example.com
    phone: "+91 9876543212"
    department: Mechanical
    profilePhoto: https://via.placeholder.com/150x150/2ECC71/FFFFFF?text=MJ
    joinDate: 2024-02-10
    isActive: true
  - id: SEDS2024004
    username: sarah.wilson
    name: Sarah Wilson
    role: Content Team
    batch: "2023"
    email: sarah.wilson@example.com
    phone: "+91 9876543213"
    department: English
    profilePhoto: https://via.placeholder.com/150x150/9B59B6/FFFFFF?text=SW
    joinDate: 2023-09-15
    isActive: true
  - id: SEDS2024005
    username: alex.brown
    name: Alex Brown
    role: Research Team
    batch: "2022"
    email: alex.brown@example.com
    phone: "+91 9876543214"
    department: Aerospace
    profilePhoto: https://via.placeholder.com/150x150/F39C12/FFFFFF?text=AB
    joinDate: 2022-07-01
    isActive: true
"#;

static SAMPLE_MEMBERS: Lazy<Vec<Member>> = Lazy::new(|| {
    parse_roster_yaml(SAMPLE_ROSTER_YAML)
        .map(|file| file.members.into_iter().map(|entry| entry.member).collect())
        .unwrap_or_default()
});

/// The five demo members.
pub fn sample_members() -> Vec<Member> {
    SAMPLE_MEMBERS.clone()
}
