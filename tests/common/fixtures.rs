// tests/common/fixtures.rs
//! Sample customer exports

#![allow(dead_code)]

pub const HEADER: &str = "first_name,last_name,email,gender,ip_address";

/// Two customers on the same domain.
pub const ROUND_TRIP: &str = "FirstName,LastName,Email\nJohn,Doe,john.doe@example.com\nJane,Smith,jane.smith@example.com\n";

/// Valid, invalid, short and duplicated rows mixed together.
pub const MIXED: &str = "\
first_name,last_name,email,gender,ip_address
Mildred,Hernandez,mhernandez0@github.io,Female,38.194.51.128
Bonnie,Ortiz,bortiz1@cyberchimps.com,Female,197.54.209.129
Dennis,Henry,dhenry2@hubpages.com,Male,155.75.186.217
Justin,Hansen,jhansen3@360.cn,Male,251.166.224.119
Carlos,Reyes,creyes4@cyberchimps.com,Male,128.54.157.88
Broken,Row
Invalid,Email,not-an-email,Female,1.2.3.4
Two,Ats,a@b@c.com,Male,1.2.3.5
Empty,Local,@github.io,Male,1.2.3.6
Padded,Space,  spaced@github.io  ,Female,1.2.3.7
Case,Kept,upper@GitHub.io,Male,1.2.3.8
";

/// Expected alphabetical report for [`MIXED`].
pub const MIXED_REPORT: [&str; 5] = [
    "360.cn: 1",
    "GitHub.io: 1",
    "cyberchimps.com: 2",
    "github.io: 2",
    "hubpages.com: 1",
];

/// Builds a CSV body with the standard header followed by `rows`.
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut body = String::from(HEADER);
    body.push('\n');
    for row in rows {
        body.push_str(row);
        body.push('\n');
    }
    body
}
