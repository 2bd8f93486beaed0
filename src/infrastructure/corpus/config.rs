pub const GITHUB_API: &str = "https://api.github.com";
pub const DEFAULT_GITHUB_ORG: &str = "urfu-2015";
pub const COURSE_PREFIXES: [&str; 2] = ["javascript-tasks-", "verstka-tasks-"];
pub const DEFAULT_TASK_COUNT: usize = 1;
