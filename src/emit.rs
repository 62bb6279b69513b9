use crate::config::Config;
use crate::disambig::{assign_display_names, count_names};
use crate::ir::{Contact, OutputCard};
use crate::normalize::{clean_name, fold_accents};
use std::fs;
use std::io;
use std::path::Path;

/// Build a filesystem-safe filename from a display name: re-clean, hard
/// truncate to the name budget, trim, append the extension.
pub fn sanitize_filename(display_name: &str, max_len: usize) -> String {
    let name: String = clean_name(display_name).chars().take(max_len).collect();
    format!("{}.vcf", name.trim())
}

/// Render the fixed five-line card body. No newline after the END marker.
pub fn render_card(display_name: &str, phone: &str, version_tag: &str) -> String {
    format!(
        "BEGIN:VCARD\nVERSION:{}\nN:{}\nTEL;CELL;VOICE:{}\nEND:VCARD",
        version_tag, display_name, phone
    )
}

/// Turn the extracted contacts into fully rendered output cards, in original
/// contact order. Names are re-cleaned defensively (a no-op for anything that
/// came through the extractor) before disambiguation.
pub fn plan_cards(contacts: &[Contact], config: &Config) -> Vec<OutputCard> {
    let counts = count_names(contacts);
    let cleaned: Vec<Contact> = contacts
        .iter()
        .map(|c| Contact {
            name: fold_accents(&clean_name(&c.name)),
            phone: c.phone.clone(),
        })
        .collect();
    let display_names = assign_display_names(&cleaned, &counts, config.max_name_len);

    cleaned
        .iter()
        .zip(display_names.iter())
        .map(|(contact, display)| OutputCard {
            filename: sanitize_filename(display, config.max_name_len),
            body: render_card(display, &contact.phone, &config.version_tag),
        })
        .collect()
}

/// Write every card into `output_dir`, creating the directory first. A card
/// whose filename repeats overwrites the earlier write. Returns the number of
/// files written.
pub fn write_cards(cards: &[OutputCard], output_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(output_dir)?;
    for card in cards {
        fs::write(output_dir.join(&card.filename), &card.body)?;
    }
    Ok(cards.len())
}
