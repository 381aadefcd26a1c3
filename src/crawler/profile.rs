//! Profile page extraction
//!
//! Name and designation are required. Every other field is read by its own
//! function returning an `Option`, and a missing section becomes an empty or
//! absent value rather than an error.

use crate::crawler::parser::{element_text, selector};
use crate::model::Professor;
use scraper::{ElementRef, Html};

/// Parses a profile page into a [`Professor`]
///
/// # Arguments
///
/// * `html` - The profile page body
/// * `email_domain` - Domain an email link and its text must both mention
///
/// # Returns
///
/// * `Ok(Professor)` - All fields extracted, absent sections left empty
/// * `Err(String)` - The page has no name or designation heading
pub fn parse_profile(html: &str, email_domain: &str) -> Result<Professor, String> {
    let document = Html::parse_document(html);

    let name = first_text(&document, "h4").ok_or_else(|| "no name heading (h4)".to_string())?;
    let designation = extract_designation(&document)
        .ok_or_else(|| "no designation heading (h5)".to_string())?;

    let contact_cards = extract_contact_cards(&document).unwrap_or_default();
    let mut cards = contact_cards.into_iter();

    Ok(Professor {
        name,
        designation,
        education: extract_section(&document, "Education").unwrap_or_default(),
        experience: extract_section(&document, "Experience").unwrap_or_default(),
        department: cards.next().flatten(),
        campus: cards.next().flatten(),
        domains: extract_domains(&document).unwrap_or_default(),
        email: extract_email(&document, email_domain),
        responsibilities: extract_responsibilities(&document).unwrap_or_default(),
    })
}

/// Trimmed text of the first element matching `css`
fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css).ok()?;
    document.select(&selector).next().map(element_text)
}

/// Splits the comma-separated designation heading into roles
fn extract_designation(document: &Html) -> Option<Vec<String>> {
    let heading = first_text(document, "h5")?;
    Some(
        heading
            .split(',')
            .map(str::trim)
            .filter(|role| !role.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

/// Reads the list that follows every `h3` titled `title`
///
/// Each list item contributes its paragraph text, or its own text when it
/// has no paragraph.
fn extract_section(document: &Html, title: &str) -> Option<Vec<String>> {
    let selector = selector("h3, ul.ul-item-left").ok()?;

    let mut entries = Vec::new();
    let mut awaiting_list = false;

    // Headers and lists come back in document order
    for element in document.select(&selector) {
        if element.value().name() == "h3" {
            if element_text(element) == title {
                awaiting_list = true;
            }
        } else if awaiting_list {
            entries.extend(list_items(element)?);
            awaiting_list = false;
        }
    }

    Some(entries)
}

fn list_items(list: ElementRef<'_>) -> Option<Vec<String>> {
    let item_selector = selector("li").ok()?;
    let paragraph_selector = selector("p").ok()?;

    Some(
        list.select(&item_selector)
            .map(|item| {
                item.select(&paragraph_selector)
                    .next()
                    .map(element_text)
                    .unwrap_or_else(|| element_text(item))
            })
            .collect(),
    )
}

/// Teaching domains listed under the teaching tab
fn extract_domains(document: &Html) -> Option<Vec<String>> {
    let selector = selector("#tab-teaching .bookings-item-content ul.ul-item-left li").ok()?;
    Some(document.select(&selector).map(element_text).collect())
}

/// First link whose target and text both mention the institution's domain
fn extract_email(document: &Html, email_domain: &str) -> Option<String> {
    let selector = selector("a").ok()?;

    document
        .select(&selector)
        .filter(|link| {
            link.value()
                .attr("href")
                .is_some_and(|href| href.contains(email_domain))
        })
        .map(element_text)
        .find(|text| text.contains(email_domain))
}

/// Text of each `li.contat-card`, in order
///
/// The first card holds the department, the second the campus. A card reads
/// its paragraph when it has one; blank cards are `None`.
fn extract_contact_cards(document: &Html) -> Option<Vec<Option<String>>> {
    // "contat" is the site's spelling
    let card_selector = selector("li.contat-card").ok()?;
    let paragraph_selector = selector("p").ok()?;

    Some(
        document
            .select(&card_selector)
            .map(|card| {
                card.select(&paragraph_selector)
                    .next()
                    .map(element_text)
                    .unwrap_or_else(|| element_text(card))
            })
            .map(|text| Some(text).filter(|t| !t.is_empty()))
            .collect(),
    )
}

fn extract_responsibilities(document: &Html) -> Option<Vec<String>> {
    let selector = selector("div#tab-responsibilities p").ok()?;
    Some(document.select(&selector).map(element_text).collect())
}
