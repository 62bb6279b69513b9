use crate::ir::{Contact, Record};
use crate::normalize::{clean_name, clean_phone, fold_accents};

/// Reformat an `N:` property value into a display name. With at least two
/// `;`-separated parts the layout is family;given;..., displayed as
/// "given family"; otherwise the raw value is used as-is.
fn display_name(value: &str) -> String {
    let parts: Vec<&str> = value.split(';').collect();
    if parts.len() >= 2 {
        format!("{} {}", parts[1].trim(), parts[0].trim())
            .trim()
            .to_string()
    } else {
        value.trim().to_string()
    }
}

/// Scan lines for BEGIN:VCARD / END:VCARD blocks and expand each complete
/// record into one contact per phone number. Records missing a name or all
/// phones are dropped silently, as is an unterminated trailing record.
pub fn extract_contacts(lines: &[String]) -> Vec<Contact> {
    let mut contacts: Vec<Contact> = Vec::new();
    let mut current: Option<Record> = None;

    for line in lines {
        let t = line.trim();

        if t == "BEGIN:VCARD" {
            current = Some(Record::default());
            continue;
        }

        if t == "END:VCARD" {
            if let Some(record) = current.take() {
                if !record.name.is_empty() && !record.phones.is_empty() {
                    for phone in record.phones {
                        contacts.push(Contact {
                            name: record.name.clone(),
                            phone,
                        });
                    }
                }
            }
            continue;
        }

        let Some(record) = current.as_mut() else {
            continue;
        };

        if let Some(value) = t.strip_prefix("N:") {
            record.name = fold_accents(&clean_name(&display_name(value.trim())));
        } else if t.starts_with("TEL;") {
            // Parameters may themselves contain colons; the number follows
            // the last one.
            let raw = t.rsplit(':').next().unwrap_or("");
            record.phones.push(clean_phone(raw.trim()));
        }
    }

    contacts
}
