use skoslint_core::{concept_set, Identifier, LooseConceptFilter, NamespaceClassifier, Statement};

const REL: &str = "http://www.w3.org/2004/02/skos/core#related";
const BROADER: &str = "http://www.w3.org/2004/02/skos/core#broader";
const PREF_LABEL: &str = "http://www.w3.org/2004/02/skos/core#prefLabel";
const SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
const A: &str = "http://ex.org/A";
const B: &str = "http://ex.org/B";
const C: &str = "http://ex.org/C";
const Z: &str = "http://ex.org/Z";

fn skos_filter() -> LooseConceptFilter<NamespaceClassifier> {
    LooseConceptFilter::new(NamespaceClassifier::skos())
}

fn sample_graph() -> Vec<Statement> {
    vec![
        Statement::new(A, BROADER, B),
        Statement::new(C, SEE_ALSO, A),
        Statement::new(B, PREF_LABEL, "\"B\"@en"),
        Statement::new("http://ex.org/D", REL, "http://ex.org/E"),
    ]
}

#[test]
fn empty_graph_keeps_every_candidate() {
    let candidates = concept_set([A, B]);
    let loose = skos_filter().filter(Vec::<Statement>::new(), &candidates);
    assert_eq!(loose, concept_set([A, B]));
}

#[test]
fn related_concepts_are_removed() {
    let candidates = concept_set([A, B, C]);
    let loose = skos_filter().filter([Statement::new(A, REL, B)], &candidates);
    assert_eq!(loose, concept_set([C]));
}

#[test]
fn predicate_outside_namespace_does_not_protect() {
    let candidates = concept_set([A, B]);
    let loose = skos_filter().filter([Statement::new(A, SEE_ALSO, B)], &candidates);
    assert_eq!(loose, concept_set([A, B]));
}

#[test]
fn self_referential_statement_counts_as_relation() {
    let candidates = concept_set([A]);
    let loose = skos_filter().filter([Statement::new(A, REL, A)], &candidates);
    assert!(loose.is_empty());
}

#[test]
fn candidate_absent_from_graph_stays_loose() {
    let candidates = concept_set([A, B, Z]);
    let loose = skos_filter().filter(&sample_graph(), &candidates);
    assert_eq!(loose, concept_set([Z]));
}

#[test]
fn object_position_also_counts() {
    let candidates = concept_set([B, C]);
    let loose = skos_filter().filter([Statement::new(Z, BROADER, B)], &candidates);
    assert_eq!(loose, concept_set([C]));
}

#[test]
fn input_candidates_are_not_mutated() {
    let candidates = concept_set([A, B, C]);
    let snapshot = candidates.clone();

    let loose = skos_filter().filter(&sample_graph(), &candidates);

    assert_eq!(candidates, snapshot);
    assert!(loose.len() < candidates.len());
}

#[test]
fn result_is_deterministic_subset() {
    let filter = skos_filter();
    let candidates = concept_set([A, B, C, Z, "http://ex.org/D"]);
    let graph = sample_graph();

    let first = filter.filter(&graph, &candidates);
    let second = filter.filter(&graph, &candidates);

    assert_eq!(first, second);
    assert!(first.is_subset(&candidates));
    assert_eq!(first, concept_set([C, Z]));
}

#[test]
fn statement_order_does_not_matter() {
    let filter = skos_filter();
    let candidates = concept_set([A, B, C, Z, "http://ex.org/D", "http://ex.org/E"]);
    let graph = sample_graph();
    let expected = filter.filter(&graph, &candidates);

    let mut reversed = graph.clone();
    reversed.reverse();
    assert_eq!(filter.filter(&reversed, &candidates), expected);

    let mut rotated = graph;
    rotated.rotate_left(2);
    assert_eq!(filter.filter(&rotated, &candidates), expected);
}

#[test]
fn duplicate_statements_are_harmless() {
    let candidates = concept_set([A, B, C]);
    let graph = [
        Statement::new(A, REL, B),
        Statement::new(A, REL, B),
        Statement::new(B, REL, A),
    ];
    let loose = skos_filter().filter(graph, &candidates);
    assert_eq!(loose, concept_set([C]));
}

#[test]
fn lazy_statement_streams_are_consumed_once() {
    let candidates = concept_set([A, B, C]);
    let mut produced = 0;
    let stream = (0..3).map(|index| {
        produced += 1;
        match index {
            0 => Statement::new(A, SEE_ALSO, B),
            1 => Statement::new(B, BROADER, Z),
            _ => Statement::new(Z, "http://ex.org/p", C),
        }
    });

    let loose = skos_filter().filter(stream, &candidates);

    assert_eq!(produced, 3);
    assert_eq!(loose, concept_set([A, C]));
}

#[test]
fn empty_candidate_set_yields_empty_result() {
    let loose = skos_filter().filter(&sample_graph(), &concept_set(Vec::<&str>::new()));
    assert!(loose.is_empty());
}

#[test]
fn closure_classifier_can_widen_the_vocabulary() {
    let filter = LooseConceptFilter::new(|predicate: &Identifier| {
        predicate.in_namespace("http://www.w3.org/2004/02/skos/core#")
            || predicate.as_str() == SEE_ALSO
    });
    let candidates = concept_set([A, B, C, Z]);

    let loose = filter.filter(&sample_graph(), &candidates);

    assert_eq!(loose, concept_set([Z]));
}

#[test]
fn filter_source_matches_iterator_filter() {
    let filter = skos_filter();
    let candidates = concept_set([A, B, C, Z]);
    let graph = sample_graph();

    let from_source = match filter.filter_source(&graph, &candidates) {
        Ok(loose) => loose,
        Err(err) => panic!("in-memory source cannot fail: {err:?}"),
    };

    assert_eq!(from_source, filter.filter(&graph, &candidates));
}
