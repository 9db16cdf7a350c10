//! Static route table.
//!
//! DESIGN
//! ======
//! The table is built once at startup and never mutated. Top-level records
//! carry absolute paths; child paths are relative and joined to their
//! parent's full path. Matching ignores ASCII case and a trailing `/`.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRecord {
    pub path: String,
    pub name: Option<String>,
    pub children: Vec<RouteRecord>,
}

impl RouteRecord {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into(), name: None, children: Vec::new() }
    }

    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<RouteRecord>) -> Self {
        self.children = children;
        self
    }
}

/// One record along a matched chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRecord {
    /// Full path of the record.
    pub path: String,
    pub name: Option<String>,
}

/// Records matched for a path, parent first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub chain: Vec<MatchedRecord>,
}

impl RouteMatch {
    /// Full path of the innermost record.
    #[must_use]
    pub fn path(&self) -> &str {
        self.chain.last().map_or("", |r| r.path.as_str())
    }

    /// Name of the innermost record.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.chain.last().and_then(|r| r.name.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RouteTable {
    routes: Vec<RouteRecord>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    /// The admin panel's pages: login at `/`, the home layout with its four
    /// management screens, and registration.
    pub fn admin() -> Self {
        Self::new(vec![
            RouteRecord::new("/").named("Login"),
            RouteRecord::new("/home").named("Home").with_children(vec![
                RouteRecord::new("user").named("User"),
                RouteRecord::new("role").named("Role"),
                RouteRecord::new("menu").named("Menu"),
                RouteRecord::new("table").named("Table"),
            ]),
            RouteRecord::new("/register").named("Register"),
        ])
    }

    /// Match `path` against the table.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let wanted = normalize(path);
        let mut chain = Vec::new();
        self.routes
            .iter()
            .any(|record| walk(record, "", &wanted, &mut chain))
            .then_some(RouteMatch { chain })
    }

    /// Full path of the record called `name`.
    #[must_use]
    pub fn path_for(&self, name: &str) -> Option<String> {
        fn find(records: &[RouteRecord], parent: &str, name: &str) -> Option<String> {
            records.iter().find_map(|record| {
                let full = join(parent, &record.path);
                if record.name.as_deref() == Some(name) {
                    return Some(full);
                }
                find(&record.children, &full, name)
            })
        }
        find(&self.routes, "", name)
    }
}

fn walk(record: &RouteRecord, parent: &str, wanted: &str, chain: &mut Vec<MatchedRecord>) -> bool {
    let full = join(parent, &record.path);
    let hit = full.eq_ignore_ascii_case(wanted);
    chain.push(MatchedRecord { path: full.clone(), name: record.name.clone() });
    if hit || record.children.iter().any(|child| walk(child, &full, wanted, chain)) {
        return true;
    }
    chain.pop();
    false
}

fn join(parent: &str, path: &str) -> String {
    if path.starts_with('/') {
        return normalize(path);
    }
    normalize(&format!("{}/{path}", parent.trim_end_matches('/')))
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/".to_owned() } else { trimmed.to_owned() }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
