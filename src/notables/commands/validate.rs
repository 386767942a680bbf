//! Admin form validation. Every failing field is reported, not just the first.

use crate::error::{FieldError, NotablesError, Result};
use crate::model::{Language, PersonalityDraft};
use once_cell::sync::Lazy;
use regex::Regex;

// Scheme optional, dotted host, any path.
static URL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .-]*)*/?$")
        .expect("URL pattern compiles")
});

pub fn is_valid_url(url: &str) -> bool {
    !url.is_empty() && URL_PATTERN.is_match(url)
}

fn is_four_digit(year: i32) -> bool {
    (1000..=9999).contains(&year)
}

/// Checks a draft against the admin form rules, given the current calendar year.
pub fn check(draft: &PersonalityDraft, current_year: i32) -> Result<()> {
    let mut errors = Vec::new();

    if draft.name.get(Language::Fr).unwrap_or("").trim().is_empty() {
        errors.push(FieldError::new("name_fr", "admin_validation_required"));
    }

    if draft.birth_year == 0 {
        errors.push(FieldError::new("birthYear", "admin_validation_required"));
    } else if !is_four_digit(draft.birth_year) {
        errors.push(FieldError::new("birthYear", "admin_validation_year"));
    } else if draft.birth_year > current_year {
        errors.push(FieldError::new("birthYear", "admin_validation_year_future"));
    }

    if let Some(death) = draft.death_year {
        if !is_four_digit(death) {
            errors.push(FieldError::new("deathYear", "admin_validation_year"));
        } else if death > current_year {
            errors.push(FieldError::new("deathYear", "admin_validation_year_future"));
        } else if draft.birth_year != 0 && death < draft.birth_year {
            errors.push(FieldError::new(
                "deathYear",
                "admin_validation_death_year_after_birth",
            ));
        }
    }

    if !is_valid_url(&draft.main_image_url) {
        errors.push(FieldError::new("mainImageUrl", "admin_validation_url"));
    }

    for (i, work) in draft.notable_works.iter().enumerate() {
        if !is_four_digit(work.year) || work.year > current_year {
            errors.push(FieldError::new(format!("work_year_{}", i), "admin_validation_year"));
        }
    }

    for (i, link) in draft.external_links.iter().enumerate() {
        if !is_valid_url(&link.url) {
            errors.push(FieldError::new(format!("link_url_{}", i), "admin_validation_url"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(NotablesError::Validation(errors))
    }
}
