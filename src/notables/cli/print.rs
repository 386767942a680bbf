use colored::Colorize;
use notables::api::{CmdMessage, MessageLevel, PageInfo};
use notables::error::FieldError;
use notables::i18n::{resolve, Labels};
use notables::model::{Language, Personality};
use notables::resolve::DetailView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 40;
const DOMAIN_WIDTH: usize = 12;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_field_errors(errors: &[FieldError], labels: &Labels, language: Language) {
    for error in errors {
        eprintln!(
            "{} {}",
            format!("{}:", error.field).red(),
            labels.t(error.label, language)
        );
    }
}

fn lifespan(person: &Personality) -> String {
    match person.death_year {
        Some(death) => format!("{}–{}", person.birth_year, death),
        None => format!("{}–", person.birth_year),
    }
}

pub(super) fn print_people(
    people: &[Personality],
    page: Option<PageInfo>,
    labels: &Labels,
    language: Language,
) {
    if people.is_empty() {
        println!("{}", labels.t("no_results_title", language).bold());
        println!("{}", labels.t("no_results_desc", language).dimmed());
        return;
    }

    for person in people {
        let idx = format!("{:>4}. ", person.id);
        let name = truncate_to_width(resolve(&person.name, language), NAME_WIDTH);
        let padding = NAME_WIDTH.saturating_sub(name.width());
        println!(
            "{}{}{}  {:<width$}  {:<10}  {}",
            idx.yellow(),
            name,
            " ".repeat(padding),
            person.domain.as_str().cyan(),
            lifespan(person),
            format!("★ {:.1}", person.rating).dimmed(),
            width = DOMAIN_WIDTH
        );
    }

    if let Some(info) = page {
        print_page_footer(&info, labels, language);
    }
}

fn print_page_footer(info: &PageInfo, labels: &Labels, language: Language) {
    let mut footer = format!(
        "{} {} {} {}",
        labels.t("pagination_page", language),
        info.page,
        labels.t("pagination_of", language),
        info.total_pages
    );
    if info.has_previous() {
        footer = format!("‹ {}  {}", labels.t("pagination_previous", language), footer);
    }
    if info.has_next() {
        footer = format!("{}  {} ›", footer, labels.t("pagination_next", language));
    }
    println!();
    println!("{}", footer.dimmed());
}

pub(super) fn print_detail(view: &DetailView<'_>, labels: &Labels, language: Language) {
    println!("{} {}", format!("{}.", view.id).yellow(), view.name.bold());
    println!("{}", view.domain.as_str().cyan());

    let mut born = format!("{} {}", labels.t("born", language), view.birth_year);
    if !view.birth_place.is_empty() {
        born = format!("{} {} {}", born, labels.t("in", language), view.birth_place);
    }
    println!("{}", born);
    if let Some(death) = view.death_year {
        println!("{} {}", labels.t("died", language), death);
    }
    println!(
        "★ {:.1} ({} {})",
        view.rating,
        view.rating_votes,
        labels.t("votes", language)
    );
    println!("{}", view.main_image_url.dimmed());

    section(labels.t("biography", language));
    println!("{}", view.bio);

    if !view.notable_works.is_empty() {
        section(labels.t("notable_works", language));
        for work in &view.notable_works {
            println!("  {} ({})", work.title, work.year);
        }
    }

    if !view.awards.is_empty() {
        section(labels.t("awards", language));
        for award in view.awards {
            println!("  {}", award);
        }
    }

    if !view.relations.is_empty() {
        section(labels.t("relations", language));
        for relation in &view.relations {
            let target = if relation.is_dangling() {
                relation.target_name.dimmed()
            } else {
                relation.target_name.normal()
            };
            println!("  {}: {}", relation.relation_label, target);
        }
    }

    if !view.media.is_empty() {
        section(labels.t("media_gallery", language));
        for media in view.media {
            println!("  {} {}", media.url, media.caption.dimmed());
        }
    }

    if !view.links.is_empty() {
        section(labels.t("external_links", language));
        for link in view.links {
            println!("  {} {}", link.name, link.url.dimmed());
        }
    }
}

fn section(title: &str) {
    println!();
    println!("{}", title.bold().underline());
}

pub(super) fn print_summary(title: &str, text: &str, disclaimer: &str) {
    section(title);
    println!("{}", text);
    println!("{}", disclaimer.dimmed());
}

pub(super) fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_are_kept() {
        assert_eq!(truncate_to_width("Ada", 10), "Ada");
        assert_eq!(truncate_to_width("Lovelace", 8), "Lovelace");
    }

    #[test]
    fn long_names_end_in_an_ellipsis() {
        assert_eq!(truncate_to_width("Ada Lovelace", 6), "Ada L…");
    }

    #[test]
    fn wide_characters_count_double() {
        let truncated = truncate_to_width("日本語の名前", 5);
        assert_eq!(truncated, "日本…");
        assert!(truncated.width() <= 5);
    }
}
