use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use nodesift_core::testkit::{ELSIE_HREF, LACIE_HREF, TILLIE_HREF, dormouse, small};
use nodesift_core::{Node, SimpleNode};
use nodesift_query::{
    Finder, MatchValue, Selector, TraversalMethod, attr, class, id, tag, tag_any, tags, text,
};
use rstest::{fixture, rstest};

const ALL_METHODS: [TraversalMethod; 12] = [
    TraversalMethod::Descendants,
    TraversalMethod::DirectChildren,
    TraversalMethod::Parent,
    TraversalMethod::PrevSibling,
    TraversalMethod::NextSibling,
    TraversalMethod::PrecedingInDocument,
    TraversalMethod::FollowingInDocument,
    TraversalMethod::Ancestors,
    TraversalMethod::PrevSiblings,
    TraversalMethod::NextSiblings,
    TraversalMethod::AllPrecedingInDocument,
    TraversalMethod::AllFollowingInDocument,
];

#[fixture]
fn soup() -> SimpleNode {
    dormouse()
}

fn every_node(root: &SimpleNode) -> Vec<SimpleNode> {
    std::iter::successors(Some(root.clone()), |n| n.following_in_document()).collect()
}

fn hrefs(nodes: &[SimpleNode]) -> Vec<&str> {
    nodes.iter().filter_map(|n| n.attribute("href")).collect()
}

fn contents(nodes: &[SimpleNode]) -> Vec<&str> {
    nodes.iter().filter_map(|n| n.text_content()).collect()
}

fn first_link(soup: &SimpleNode) -> SimpleNode {
    soup.find(TraversalMethod::Descendants, &tags::a().into()).expect("first link")
}

#[rstest]
fn find_all_by_tag_and_attributes(soup: SimpleNode) {
    use TraversalMethod::Descendants;

    let titles = soup.find_all(Descendants, &tags::title().into());
    assert_eq!(contents(&[titles[0].first_child().unwrap()]), vec!["The Dormouse's story"]);
    assert_eq!(titles.len(), 1);

    let title_p = soup.find_all(Descendants, &Selector::tag(tags::p()).with(class("title")));
    assert_eq!(title_p.len(), 1);
    assert_eq!(title_p[0].attribute("class"), Some("title"));

    let links = soup.find_all(Descendants, &tags::a().into());
    assert_eq!(hrefs(&links), vec![ELSIE_HREF, LACIE_HREF, TILLIE_HREF]);

    let lacie = soup.find_all(Descendants, &Selector::any().with(id("link2")));
    assert_eq!(hrefs(&lacie), vec![LACIE_HREF]);

    let elsie = soup.find_all(Descendants, &Selector::any().with(attr("href", MatchValue::pattern("elsie").unwrap())));
    assert_eq!(hrefs(&elsie), vec![ELSIE_HREF]);

    let with_id = soup.find_all(Descendants, &Selector::any().with(id(MatchValue::Any)));
    assert_eq!(hrefs(&with_id), vec![ELSIE_HREF, LACIE_HREF, TILLIE_HREF]);

    let both = Selector::any().with(attr("href", MatchValue::pattern("elsie").unwrap())).with(id("link1"));
    assert_eq!(hrefs(&soup.find_all(Descendants, &both)), vec![ELSIE_HREF]);

    let contradicting = Selector::any().with(attr("href", MatchValue::pattern("elsie").unwrap())).with(id("link2"));
    assert!(soup.find_all(Descendants, &contradicting).is_empty());
}

#[rstest]
fn text_filter_without_tag_searches_text_nodes(soup: SimpleNode) {
    let selector = Selector::any().with(text(MatchValue::pattern("sisters").unwrap()));
    let found = soup.find_all(TraversalMethod::Descendants, &selector);
    assert_eq!(
        contents(&found),
        vec!["Once upon a time there were three little sisters; and their names were\n"]
    );
}

#[rstest]
fn up_to_and_first(soup: SimpleNode) {
    let two = soup.find_up_to(TraversalMethod::Descendants, 2, &tags::a().into());
    assert_eq!(hrefs(&two), vec![ELSIE_HREF, LACIE_HREF]);

    let title = soup.find(TraversalMethod::Descendants, &tags::title().into()).unwrap();
    assert_eq!(title.tag_name(), Some("title"));
    assert!(soup.find(TraversalMethod::Descendants, &tag("nosuchtag").into()).is_none());

    let head = soup.find(TraversalMethod::Descendants, &tags::head().into()).unwrap();
    assert_eq!(head.find(TraversalMethod::Descendants, &tags::title().into()), Some(title));
}

#[rstest]
fn single_hop_methods_name_one_candidate(soup: SimpleNode) {
    let lacie = soup.find_text(TraversalMethod::Descendants, text("Lacie")).unwrap();
    let parents = lacie.find_all(TraversalMethod::Parent, &tags::a().into());
    assert_eq!(hrefs(&parents), vec![LACIE_HREF]);
    // The parent is the link, so a paragraph can only be found further up.
    assert!(lacie.find(TraversalMethod::Parent, &tags::p().into()).is_none());

    let link = first_link(&soup);
    // The next sibling of the first link is the ",\n" text node.
    assert!(link.find_all(TraversalMethod::NextSibling, &tags::a().into()).is_empty());
    assert!(link.find(TraversalMethod::FollowingInDocument, &Selector::any()).is_none());
    let elsie = link.find_text(TraversalMethod::FollowingInDocument, text(MatchValue::Any)).unwrap();
    assert_eq!(elsie.text_content(), Some("Elsie"));
    let intro = link.find_text(TraversalMethod::PrecedingInDocument, text(MatchValue::Any)).unwrap();
    assert!(intro.text_content().unwrap().starts_with("Once upon a time"));
    let comma = link.find_text(TraversalMethod::NextSibling, text(",\n"));
    assert!(comma.is_some());

    let b = soup.find(TraversalMethod::Descendants, &tags::b().into()).unwrap();
    let p = b.find(TraversalMethod::PrecedingInDocument, &Selector::any()).unwrap();
    assert_eq!(p.attribute("class"), Some("title"));
}

#[rstest]
fn chained_methods_repeat_the_hop(soup: SimpleNode) {
    let lacie = soup.find_text(TraversalMethod::Descendants, text("Lacie")).unwrap();
    let story = lacie.find(TraversalMethod::Ancestors, &tags::p().into()).unwrap();
    assert!(story.attribute("class").is_some_and(|c| c == "story"));
    assert!(lacie.find_all(TraversalMethod::Ancestors, &Selector::tag(tags::p()).with(class("title"))).is_empty());

    let link = first_link(&soup);
    let next = link.find_all(TraversalMethod::NextSiblings, &tags::a().into());
    assert_eq!(hrefs(&next), vec![LACIE_HREF, TILLIE_HREF]);

    let last = soup.find(TraversalMethod::Descendants, &Selector::tag(tags::a()).with(id("link3"))).unwrap();
    let prev = last.find_all(TraversalMethod::PrevSiblings, &tags::a().into());
    assert_eq!(hrefs(&prev), vec![LACIE_HREF, ELSIE_HREF]);

    let ellipsis = story.find(TraversalMethod::NextSiblings, &tags::p().into()).unwrap();
    assert_eq!(contents(&[ellipsis.first_child().unwrap()]), vec!["..."]);
    let heading = story.find(TraversalMethod::PrevSiblings, &tags::p().into()).unwrap();
    assert_eq!(heading.attribute("class"), Some("title"));

    let following = link.find_all_text(TraversalMethod::AllFollowingInDocument, text(MatchValue::Any));
    assert_eq!(
        contents(&following),
        vec![
            "Elsie",
            ",\n",
            "Lacie",
            " and\n",
            "Tillie",
            ";\nand they lived at the bottom of a well.",
            "\n\n",
            "...",
            "\n",
        ]
    );
    assert_eq!(link.find(TraversalMethod::AllFollowingInDocument, &tags::p().into()), Some(ellipsis));

    let preceding = link.find_all(TraversalMethod::AllPrecedingInDocument, &tags::p().into());
    assert_eq!(preceding, vec![story, heading]);
    let title = link.find(TraversalMethod::AllPrecedingInDocument, &tags::title().into()).unwrap();
    assert_eq!(title.tag_name(), Some("title"));
}

#[rstest]
fn direct_children_only(soup: SimpleNode) {
    let html = soup.find(TraversalMethod::Descendants, &tag("html").into()).unwrap();
    assert!(html.find_all(TraversalMethod::DirectChildren, &tags::title().into()).is_empty());
    let children = html.find_all(TraversalMethod::DirectChildren, &Selector::any());
    let names: Vec<_> = children.iter().filter_map(|n| n.tag_name()).collect();
    assert_eq!(names, vec!["head", "body"]);

    let story = soup.find(TraversalMethod::Descendants, &Selector::tag(tags::p()).with(class("story"))).unwrap();
    assert_eq!(story.find_all(TraversalMethod::DirectChildren, &tags::a().into()).len(), 3);
    let texts = story.find_all_text(TraversalMethod::DirectChildren, text(MatchValue::Any));
    assert_eq!(texts.len(), 4);
}

#[test]
fn sibling_and_parent_scenario() {
    let a = small();
    let any = Selector::any();
    let b = a.find(TraversalMethod::Descendants, &tags::b().into()).unwrap();
    let c = a.find(TraversalMethod::Descendants, &tag("c").into()).unwrap();

    assert_eq!(b.find(TraversalMethod::NextSibling, &any), Some(c.clone()));
    assert_eq!(c.find(TraversalMethod::PrevSibling, &any), Some(b.clone()));
    assert_eq!(b.find(TraversalMethod::Parent, &any), Some(a.clone()));
    assert!(b.find(TraversalMethod::PrevSibling, &any).is_none());
    assert!(c.find(TraversalMethod::NextSibling, &any).is_none());
}

#[rstest]
fn start_node_is_never_a_result(soup: SimpleNode) {
    let nodes = every_node(&soup);
    for node in &nodes {
        for method in ALL_METHODS {
            let elements = node.find_all(method, &Selector::any());
            assert!(!elements.contains(node), "{method:?} returned its start node");
            let texts = node.find_all_text(method, text(MatchValue::Any));
            assert!(!texts.contains(node), "{method:?} returned its start node");
        }
    }

    // An element that would match its own selector is still excluded.
    let story = soup.find(TraversalMethod::Descendants, &Selector::tag(tags::p()).with(class("story"))).unwrap();
    let selector = Selector::tag(tags::p()).with(class("story"));
    assert!(!story.find_all(TraversalMethod::Descendants, &selector).contains(&story));
    assert!(soup.find_all(TraversalMethod::Descendants, &selector).contains(&story));
}

#[rstest]
fn up_to_is_a_prefix_of_all(soup: SimpleNode) {
    let starts: Vec<SimpleNode> = every_node(&soup).into_iter().step_by(3).collect();
    let selectors = [Selector::any(), tag_any().into(), Selector::tag(tags::a()).with(class("sister"))];
    for start in &starts {
        for method in ALL_METHODS {
            for selector in &selectors {
                let all = start.find_all(method, selector);
                for limit in 0..=4 {
                    let some = start.find_up_to(method, limit, selector);
                    assert_eq!(some.as_slice(), &all[..limit.min(all.len())], "{method:?} limit {limit}");
                }
                assert_eq!(start.find(method, selector), all.first().cloned());
            }
            let all_text = start.find_all_text(method, text(MatchValue::Any));
            let some_text = start.find_text_up_to(method, 2, text(MatchValue::Any));
            assert_eq!(some_text.as_slice(), &all_text[..all_text.len().min(2)]);
        }
    }
}

#[rstest]
fn limit_stops_the_walk(soup: SimpleNode) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let counting = Selector::tag(tag(MatchValue::predicate(move |_: &str, _: &SimpleNode| {
        counter.fetch_add(1, Ordering::SeqCst);
        true
    })));

    assert!(soup.find_up_to(TraversalMethod::Descendants, 0, &counting).is_empty());
    assert!(soup.find_text_up_to(TraversalMethod::Descendants, 0, text(MatchValue::Any)).is_empty());
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    let first = soup.find(TraversalMethod::Descendants, &counting).unwrap();
    assert_eq!(first.tag_name(), Some("html"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    calls.store(0, Ordering::SeqCst);
    assert_eq!(soup.find_up_to(TraversalMethod::Descendants, 3, &counting).len(), 3);
    assert_eq!(calls.load(Ordering::SeqCst), 3);

    calls.store(0, Ordering::SeqCst);
    assert_eq!(soup.find_all(TraversalMethod::Descendants, &counting).len(), 11);
    assert_eq!(calls.load(Ordering::SeqCst), 11);
}

#[rstest]
#[should_panic(expected = "predicate failed")]
fn predicate_panics_propagate(soup: SimpleNode) {
    let exploding = Selector::any().with(id(MatchValue::predicate(|_: &str, _: &SimpleNode| -> bool {
        panic!("predicate failed")
    })));
    let _ = soup.find_all(TraversalMethod::Descendants, &exploding);
}

#[rstest]
fn concurrent_queries_share_the_tree(soup: SimpleNode) {
    let selector = Selector::tag(tags::a()).with(class("sister"));
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| soup.find_all(TraversalMethod::Descendants, &selector).len()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    });
}

#[rstest]
fn selector_shortcuts(soup: SimpleNode) {
    let selector = Selector::tag(tags::a()).with(class("sister"));
    assert_eq!(selector.all(&soup, TraversalMethod::Descendants).len(), 3);
    assert_eq!(hrefs(&selector.up_to(&soup, TraversalMethod::Descendants, 1)), vec![ELSIE_HREF]);
    let first = selector.first(&soup, TraversalMethod::Descendants).unwrap();
    assert_eq!(first.attribute("id"), Some("link1"));
    assert!(TraversalMethod::Parent.is_single_hop());
    assert!(TraversalMethod::Ancestors.is_chained());
    assert!(!TraversalMethod::Descendants.is_chained());
}
