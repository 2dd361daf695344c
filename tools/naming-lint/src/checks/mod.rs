pub mod file_names;

pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
}
