//! Sample postings shared by the HTTP tests

/// A job as typed into the form.
#[derive(Debug, Clone, Copy)]
pub struct JobFixture {
    pub title: &'static str,
    pub company: &'static str,
    pub category: &'static str,
    pub desc: &'static str,
}

impl JobFixture {
    pub fn form(&self) -> [(&'static str, &'static str); 4] {
        [
            ("title", self.title),
            ("company", self.company),
            ("category", self.category),
            ("desc", self.desc),
        ]
    }
}

pub const ENGINEER: JobFixture = JobFixture {
    title: "Software Engineer",
    company: "Acme",
    category: "IT",
    desc: "Rust services",
};

pub const ACCOUNT_EXEC: JobFixture = JobFixture {
    title: "Account Executive",
    company: "Globex",
    category: "Sales",
    desc: "Sell to engineering teams",
};

pub const ANALYST: JobFixture = JobFixture {
    title: "Support Analyst",
    company: "Initech",
    category: "IT",
    desc: "",
};

pub const SALES_ENGINEER: JobFixture = JobFixture {
    title: "Sales Engineer",
    company: "Hooli",
    category: "Sales",
    desc: "Pre-sales demos",
};

pub const ALL: &[JobFixture] = &[ENGINEER, ACCOUNT_EXEC, ANALYST];
