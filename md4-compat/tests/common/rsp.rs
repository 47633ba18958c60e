//! A reader for the CAVS `.rsp` layout.
//!
//! Files are `#` comments, `[...]` section headers, and blank-line separated records of
//! `Name = value` lines.

pub struct Record<'t> {
    fields: Vec<(&'t str, &'t str)>
}

impl<'t> Record<'t> {
    pub fn get(&self, name: &str) -> Option<&'t str> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
    }

    pub fn field(&self, name: &str) -> &'t str {
        self.get(name).unwrap_or_else(|| panic!("[PARSE] missing `{name}` field"))
    }

    pub fn usize(&self, name: &str) -> usize {
        self.field(name)
            .parse()
            .unwrap_or_else(|_| panic!("[PARSE] `{name}` was not a number"))
    }
}

pub struct Records<'t> {
    lines: core::str::Lines<'t>
}

impl<'t> Records<'t> {
    pub fn new(raw: &'t str) -> Self {
        Self { lines: raw.lines() }
    }
}

fn ignorable(line: &str) -> bool {
    line.starts_with('#') || (line.starts_with('[') && line.ends_with(']'))
}

impl<'t> Iterator for Records<'t> {
    type Item = Record<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut fields = Vec::new();

        for line in self.lines.by_ref() {
            let line = line.trim();

            if line.is_empty() {
                if fields.is_empty() { continue } else { break }
            }
            if ignorable(line) { continue }

            let (name, value) = line.split_once('=')
                .unwrap_or_else(|| panic!("[PARSE] expected `Name = value`, got `{line}`"));
            fields.push((name.trim(), value.trim()));
        }

        if fields.is_empty() { None } else { Some(Record { fields }) }
    }
}
