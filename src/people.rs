//! Static list of people shown in the gallery
//!
//! Compiled in, never mutated. Order here is display order.

/// A biographical gallery entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub name: &'static str,
    /// Image path relative to the site root
    pub image: &'static str,
    pub description: &'static str,
    /// Link to read more
    pub source: &'static str,
}

impl Person {
    /// Case-insensitive substring match against name and description.
    ///
    /// An empty filter matches everyone.
    pub fn matches(&self, filter: &str) -> bool {
        let haystack = format!("{} {}", self.name, self.description).to_lowercase();
        haystack.contains(&filter.to_lowercase())
    }
}

/// Every person in the gallery
pub static PEOPLE: [Person; 8] = [
    Person {
        name: "Thomas Edison",
        image: "assets/images/thomas-edison.jpg",
        description: "Once told he was a poor student, Edison later held over 1,000 patents and invented the practical electric light.",
        source: "https://en.wikipedia.org/wiki/Thomas_Edison",
    },
    Person {
        name: "James Dyson",
        image: "assets/images/james-dyson.jpg",
        description: "Built thousands of failed prototypes before inventing the successful bagless vacuum.",
        source: "https://en.wikipedia.org/wiki/James_Dyson",
    },
    Person {
        name: "Steven Spielberg",
        image: "assets/images/steven-spielberg.jpg",
        description: "Rejected by film school early in his career, later became a legendary director.",
        source: "https://en.wikipedia.org/wiki/Steven_Spielberg",
    },
    Person {
        name: "J. K. Rowling",
        image: "assets/images/jk-rowling.jpg",
        description: "Faced repeated publisher rejections before Harry Potter became a global phenomenon.",
        source: "https://en.wikipedia.org/wiki/J._K._Rowling",
    },
    Person {
        name: "Stephen King",
        image: "assets/images/stephen-king.jpg",
        description: "Had early rejections but persisted to become a prolific and bestselling author.",
        source: "https://en.wikipedia.org/wiki/Stephen_King",
    },
    Person {
        name: "Bill Gates",
        image: "assets/images/bill-gates.jpg",
        description: "Early project Traf-O-Data failed but taught lessons used to build Microsoft.",
        source: "https://en.wikipedia.org/wiki/Bill_Gates",
    },
    Person {
        name: "Steve Jobs",
        image: "assets/images/steve-jobs.jpg",
        description: "Was ousted from Apple, later returned and led landmark product launches.",
        source: "https://en.wikipedia.org/wiki/Steve_Jobs",
    },
    Person {
        name: "Albert Einstein",
        image: "assets/images/albert-einstein.jpg",
        description: "Had early academic struggles but developed revolutionary physics while working at a patent office.",
        source: "https://en.wikipedia.org/wiki/Albert_Einstein",
    },
];

/// People matching `filter`, in list order
pub fn filter_people<'a>(people: &'a [Person], filter: &str) -> Vec<&'a Person> {
    people.iter().filter(|p| p.matches(filter)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_matches_all() {
        assert_eq!(filter_people(&PEOPLE, "").len(), PEOPLE.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let hits = filter_people(&PEOPLE, "ROWLING");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "J. K. Rowling");
    }

    #[test]
    fn test_filter_searches_description() {
        // "rejections" appears in Rowling's and King's descriptions only
        let names: Vec<_> = filter_people(&PEOPLE, "rejections")
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["J. K. Rowling", "Stephen King"]);
    }

    #[test]
    fn test_filter_spans_name_and_description() {
        // Name and description are joined by a single space
        let hits = filter_people(&PEOPLE, "edison once");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Thomas Edison");
    }

    #[test]
    fn test_filter_keeps_list_order() {
        let names: Vec<_> = filter_people(&PEOPLE, "steve")
            .iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Steven Spielberg", "Steve Jobs"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_people(&PEOPLE, "zzz-no-such-person").is_empty());
    }
}
