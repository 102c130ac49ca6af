use super::*;

#[test]
fn link_target_values() {
    assert_eq!(LinkTarget::NewTab.as_str(), "_blank");
    assert_eq!(LinkTarget::SameTab.as_str(), "_self");
    assert_eq!(LinkTarget::default(), LinkTarget::SameTab);
}

#[test]
fn journals_open_in_new_tabs() {
    assert_eq!(JOURNALS.len(), 4);
    for journal in JOURNALS {
        assert!(journal.href.starts_with("https://"));
        assert_eq!(journal.target, LinkTarget::NewTab);
    }
}

#[test]
fn primary_email_is_first_trimmed_address() {
    assert_eq!(EDITORIAL_TEAM[0].primary_email(), "pawansomavanshi.PhD@geca.ac.in");
    assert_eq!(EDITORIAL_TEAM[0].mailto_href(), "mailto:pawansomavanshi.PhD@geca.ac.in");
    assert_eq!(EDITORIAL_TEAM[1].primary_email(), "dholeswapnil25@gmail.com");
}

#[test]
fn tel_href_strips_whitespace() {
    assert_eq!(tel_href("+91 90964 99989"), "tel:+919096499989");
    assert_eq!(EDITORIAL_TEAM[1].tel_href(), "tel:+918983245607");
    assert_eq!(tel_href(PHONE), "tel:+919766930707");
}

#[test]
fn section_copy_counts() {
    assert_eq!(STATS.len(), 4);
    assert_eq!(ABOUT_HIGHLIGHTS.len(), 4);
    assert_eq!(VISION_POINTS.len(), 3);
    assert_eq!(MISSIONS.len(), 5);
    assert_eq!(REGISTRATIONS.len(), 3);
    assert_eq!(SOCIAL_LINKS.len(), 4);
}

#[test]
fn footer_links_follow_page_order() {
    let positions: Vec<usize> = FOOTER_LINKS
        .iter()
        .map(|id| SectionId::ALL.iter().position(|s| s == id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}
