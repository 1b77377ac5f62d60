//! Sample documents shared by the test suites of the workspace.

use crate::simple::{SimpleNode, doc, elem, text};

pub const ELSIE_HREF: &str = "http://example.com/elsie";
pub const LACIE_HREF: &str = "http://example.com/lacie";
pub const TILLIE_HREF: &str = "http://example.com/tillie";

/// The "three little sisters" page, shaped the way an HTML parser builds it
/// (whitespace between block elements is kept as text nodes):
///
/// ```text
/// <html><head><title>The Dormouse's story</title></head>
/// <body>
/// <p class="title"><b>The Dormouse's story</b></p>
///
/// <p class="story">Once upon a time there were three little sisters; and their names were
/// <a href="http://example.com/elsie" class="sister" id="link1">Elsie</a>,
/// <a href="http://example.com/lacie" class="sister" id="link2">Lacie</a> and
/// <a href="http://example.com/tillie" class="sister" id="link3">Tillie</a>;
/// and they lived at the bottom of a well.</p>
///
/// <p class="story">...</p>
/// ```
///
/// The returned node is the document; it holds 11 elements and 15 text nodes.
pub fn dormouse() -> SimpleNode {
    let sister = |href: &str, id: &str, name: &str| {
        elem("a").attr("href", href).attr("class", "sister").attr("id", id).child(text(name))
    };
    doc()
        .child(
            elem("html")
                .child(elem("head").child(elem("title").child(text("The Dormouse's story"))))
                .child(text("\n"))
                .child(
                    elem("body")
                        .child(text("\n"))
                        .child(
                            elem("p")
                                .attr("class", "title")
                                .child(elem("b").child(text("The Dormouse's story"))),
                        )
                        .child(text("\n\n"))
                        .child(
                            elem("p")
                                .attr("class", "story")
                                .child(text(
                                    "Once upon a time there were three little sisters; and their names were\n",
                                ))
                                .child(sister(ELSIE_HREF, "link1", "Elsie"))
                                .child(text(",\n"))
                                .child(sister(LACIE_HREF, "link2", "Lacie"))
                                .child(text(" and\n"))
                                .child(sister(TILLIE_HREF, "link3", "Tillie"))
                                .child(text(";\nand they lived at the bottom of a well.")),
                        )
                        .child(text("\n\n"))
                        .child(elem("p").attr("class", "story").child(text("...")))
                        .child(text("\n")),
                ),
        )
        .build()
}

/// `<a><b>t1</b><c>t2</c></a>`
pub fn small() -> SimpleNode {
    elem("a").child(elem("b").child(text("t1"))).child(elem("c").child(text("t2"))).build()
}
