// Hostgroup template - A named regular expression selecting instances
use crate::domain::template::{template_record, TemplateKind};

template_record! {
    pub struct Hostgroup(TemplateKind::Hostgroup) {
        pub regexp: String,
    }
}

/// Build the `instance_selector` alternation for a set of hostgroup regexps
pub fn instance_selector<'a>(regexps: impl IntoIterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = regexps.into_iter().collect();
    format!("({})", joined.join("|"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_selector() {
        assert_eq!(instance_selector(["web-.*", "db-0[12]"]), "(web-.*|db-0[12])");
        assert_eq!(instance_selector(Vec::<&str>::new()), "()");
    }
}
