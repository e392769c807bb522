//! The demo page: a certification showcase carrying every marker the
//! animator reacts to.

use festoon_engine::{ElementSpec, Page};

pub fn certification_page() -> Page {
    let mut page = Page::new();
    let root = page.root();

    let nav = page.append(root, ElementSpec::new("nav"));
    page.append(nav, ElementSpec::new("a").attr("href", "#stats").text("Stats"));
    page.append(
        nav,
        ElementSpec::new("a")
            .attr("href", "#certifications")
            .text("Certifications"),
    );
    page.append(
        nav,
        ElementSpec::new("a").attr("href", "#archive").text("Archive"),
    );
    page.append(
        nav,
        ElementSpec::new("a")
            .attr("href", "https://example.com")
            .text("External"),
    );

    let hero = page.append(
        root,
        ElementSpec::new("header")
            .class("hero")
            .class("animate-on-scroll"),
    );
    page.append(hero, ElementSpec::new("h1").text("Certification Wall"));

    let section = page.append(
        root,
        ElementSpec::new("section")
            .class("cert-section")
            .id("certifications"),
    );
    page.append(section, ElementSpec::new("div").class("floating-elements"));

    let stats = page.append(
        section,
        ElementSpec::new("div").class("stats-bar").id("stats"),
    );
    let figures = [
        ("250", "Certificates issued"),
        ("15", "Categories"),
        ("98", "Pass rate"),
    ];
    for (target, label) in figures {
        let stat = page.append(stats, ElementSpec::new("div").class("stat"));
        page.append(
            stat,
            ElementSpec::new("span")
                .class("stat-number")
                .attr("data-target", target)
                .text("0"),
        );
        page.append(
            stat,
            ElementSpec::new("span").class("stat-label").text(label),
        );
    }

    let grid = page.append(section, ElementSpec::new("div").class("cert-grid"));
    let titles = [
        "Rust Foundations",
        "Systems Programming",
        "Network Services",
        "Storage Engines",
    ];
    for title in titles {
        let card = page.append(grid, ElementSpec::new("div").class("cert-card"));
        page.append(card, ElementSpec::new("h3").text(title));
    }

    page
}
