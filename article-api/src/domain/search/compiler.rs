//! Compiles search requests into a [`Predicate`].

use super::predicate::{Field, Predicate};
use super::registry::{EmptySelection, Universe};
use super::types::FilterRequest;

/// A domain allow-list: which registry, and what an empty selection means.
#[derive(Debug, Clone, Copy)]
pub struct AllowList {
    pub universe: Universe,
    pub empty_selection: EmptySelection,
}

/// Compile an advanced search.
///
/// The result is the conjunction of, in order:
/// - the OR over `or_groups`, each group being the AND of its `|`-separated
///   keywords matched against `text`,
/// - one negated `text` match per exclude,
/// - the `title` and `url` substring filters,
/// - the OR over the url domains expanded from the allow-list selection.
///
/// Terms with nothing to filter on are left out; an empty request compiles
/// to [`Predicate::True`].
pub fn compile_filter(request: &FilterRequest, allow_list: Option<AllowList>) -> Predicate {
    let mut terms = Vec::new();

    if let Some(groups) = or_groups_term(&request.or_groups) {
        terms.push(groups);
    }

    terms.extend(
        request
            .excludes
            .iter()
            .map(|word| !Predicate::contains(Field::Text, word.as_str())),
    );

    if let Some(title) = &request.title {
        terms.push(Predicate::contains(Field::Title, title.as_str()));
    }

    if let Some(url) = &request.url {
        terms.push(Predicate::contains(Field::Url, url.as_str()));
    }

    if let Some(domains) = allow_list.and_then(|list| domain_term(request, list)) {
        terms.push(domains);
    }

    Predicate::all(terms)
}

/// `title` or `text` contains `query`.
pub fn compile_simple(query: &str) -> Predicate {
    Predicate::any([
        Predicate::contains(Field::Title, query),
        Predicate::contains(Field::Text, query),
    ])
}

/// AND over whichever of `title`, `text` and `url` are present.
///
/// Returns `None` if none of them is.
pub fn compile_fielded(request: &FilterRequest) -> Option<Predicate> {
    let terms: Vec<_> = [
        (Field::Title, &request.title),
        (Field::Text, &request.text),
        (Field::Url, &request.url),
    ]
    .into_iter()
    .filter_map(|(field, value)| {
        value
            .as_deref()
            .map(|value| Predicate::contains(field, value))
    })
    .collect();

    if terms.is_empty() {
        None
    } else {
        Some(Predicate::all(terms))
    }
}

fn or_groups_term(groups: &[String]) -> Option<Predicate> {
    if groups.is_empty() {
        return None;
    }

    // An empty keyword (`a||b`) is kept and matches every row
    let groups = groups.iter().map(|group| {
        Predicate::all(
            group
                .split('|')
                .map(|keyword| Predicate::contains(Field::Text, keyword)),
        )
    });

    Some(Predicate::any(groups))
}

fn domain_term(request: &FilterRequest, list: AllowList) -> Option<Predicate> {
    let domains = list
        .universe
        .registry()
        .expand(request.selection(list.universe), list.empty_selection);

    if domains.is_empty() {
        return None;
    }

    Some(Predicate::any(
        domains
            .into_iter()
            .map(|domain| Predicate::contains(Field::Url, domain)),
    ))
}
