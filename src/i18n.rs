//! Localization Lookup
//!
//! Language detection plus a key → text lookup. Unknown keys render as
//! the key itself so a missing entry is visible but never fatal.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lang {
    De,
    #[default]
    En,
}

impl Lang {
    /// `de`, `de-DE`, `de-AT`... are German, everything else English
    pub fn detect(language: &str) -> Self {
        if language.to_lowercase().starts_with("de") {
            Lang::De
        } else {
            Lang::En
        }
    }

    fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Lang::De => DE,
            Lang::En => EN,
        }
    }
}

/// Look up `key`, falling back to the key
pub fn t<'a>(lang: Lang, key: &'a str) -> &'a str {
    lang.table()
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .unwrap_or(key)
}

/// Look up `key` and fill `{name}` placeholders
pub fn tf(lang: Lang, key: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(lang, key).to_string(), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}

const DE: &[(&str, &str)] = &[
    // navbar
    ("title", "Inventur"),
    ("home", "Startseite"),
    ("events", "Veranstaltungen"),
    ("userManagement", "Benutzerverwaltung"),
    // table
    ("infoC", "Info"),
    ("actionC", "Aktionen"),
    ("deletB", "Löschen"),
    ("col_gruppe", "Gruppe"),
    ("col_name_id", "Name/ID"),
    ("col_lagerort", "Lagerort"),
    ("col_anzahl", "Anzahl"),
    ("col_aktuell", "Aktuell"),
    ("col_datum", "Datum"),
    ("col_name", "Name"),
    ("col_ort", "Ort"),
    ("col_verantwortlich", "Verantwortlich"),
    ("col_username", "Benutzername"),
    ("col_password", "Passwort"),
    ("col_role", "Rolle"),
    ("col_assigned", "Menge"),
    ("none_option", "- kein -"),
    ("role_admin", "Administrator"),
    ("role_editor", "Editor"),
    ("role_user", "Benutzer"),
    ("add_row", "+ Neue Zeile"),
    ("add_group", "Hinzufügen"),
    ("group_placeholder", "Neue Gruppe"),
    ("groups", "Gruppen"),
    ("documents", "Anleitungen"),
    ("details", "Details"),
    // prompts
    ("err_prefix", "FEHLER: "),
    ("err_empty_value", "Der Wert darf nicht leer sein"),
    ("err_invalid_date", "Ungültiges Datum"),
    ("err_group_empty", "Bitte geben Sie einen Gruppennamen ein."),
    ("err_group_exists", "Eine Gruppe mit diesem Namen existiert bereits."),
    ("err_no_group", "Zuerst eine Gruppe anlegen!"),
    ("err_upload_failed", "Hochladen fehlgeschlagen"),
    ("warn_qty_max", "Maximale verfügbare Menge ({max}) überschritten!"),
    ("warn_only_pdf", "Nur PDFs erlaubt!"),
    ("confirm_delete", "Löschen?"),
    ("confirm_delete_event", "Event wirklich löschen?"),
    ("confirm_delete_user", "Wirklich löschen?"),
    ("confirm_delete_group", "Gruppe wirklich löschen? Alle Artikel die dieser Gruppe zugewiesen sind, werden einer anderen Gruppe zugewiesen!"),
    ("confirm_delete_pdf", "PDF löschen?"),
    ("confirm_remove_assignment", "Gerät von Veranstaltung entfernen?"),
    // upload panel
    ("docs_title", "Anleitungen: {name}"),
    ("docs_empty", "Keine PDFs vorhanden."),
    ("drop_hint", "PDF hierher ziehen oder klicken"),
    ("close", "Schließen"),
    // event detail
    ("assign_items", "Geräte hinzufügen"),
    ("assign_confirm", "Ausgewählte hinzufügen"),
    ("available", "Verfügbar: {n}"),
    ("unknown_page", "Unbekannte Seite"),
];

const EN: &[(&str, &str)] = &[
    // navbar
    ("title", "Inventory"),
    ("home", "Home"),
    ("events", "Events"),
    ("userManagement", "User Management"),
    // table
    ("infoC", "Info"),
    ("actionC", "Actions"),
    ("deletB", "Delete"),
    ("col_gruppe", "Group"),
    ("col_name_id", "Name/ID"),
    ("col_lagerort", "Location"),
    ("col_anzahl", "Quantity"),
    ("col_aktuell", "Current"),
    ("col_datum", "Date"),
    ("col_name", "Name"),
    ("col_ort", "Place"),
    ("col_verantwortlich", "Responsible"),
    ("col_username", "Username"),
    ("col_password", "Password"),
    ("col_role", "Role"),
    ("col_assigned", "Amount"),
    ("none_option", "- none -"),
    ("role_admin", "Administrator"),
    ("role_editor", "Editor"),
    ("role_user", "User"),
    ("add_row", "+ New row"),
    ("add_group", "Add"),
    ("group_placeholder", "New group"),
    ("groups", "Groups"),
    ("documents", "Manuals"),
    ("details", "Details"),
    // prompts
    ("err_prefix", "ERROR: "),
    ("err_empty_value", "The value must not be empty"),
    ("err_invalid_date", "Invalid date"),
    ("err_group_empty", "Please enter a group name."),
    ("err_group_exists", "A group with this name already exists."),
    ("err_no_group", "Create a group first!"),
    ("err_upload_failed", "Upload failed"),
    ("warn_qty_max", "Maximum available quantity ({max}) exceeded!"),
    ("warn_only_pdf", "Only PDFs allowed!"),
    ("confirm_delete", "Delete?"),
    ("confirm_delete_event", "Really delete this event?"),
    ("confirm_delete_user", "Really delete?"),
    ("confirm_delete_group", "Really delete this group? All items assigned to it will be moved to another group!"),
    ("confirm_delete_pdf", "Delete PDF?"),
    ("confirm_remove_assignment", "Remove this item from the event?"),
    // upload panel
    ("docs_title", "Manuals: {name}"),
    ("docs_empty", "No PDFs yet."),
    ("drop_hint", "Drop PDFs here or click"),
    ("close", "Close"),
    // event detail
    ("assign_items", "Add items"),
    ("assign_confirm", "Add selected"),
    ("available", "Available: {n}"),
    ("unknown_page", "Unknown page"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_language() {
        assert_eq!(Lang::detect("de-DE"), Lang::De);
        assert_eq!(Lang::detect("DE"), Lang::De);
        assert_eq!(Lang::detect("en-US"), Lang::En);
        assert_eq!(Lang::detect("fr"), Lang::En);
    }

    #[test]
    fn test_lookup_and_fallback() {
        assert_eq!(t(Lang::De, "home"), "Startseite");
        assert_eq!(t(Lang::En, "home"), "Home");
        assert_eq!(t(Lang::En, "no_such_key"), "no_such_key");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(
            tf(Lang::De, "warn_qty_max", &[("max", "3")]),
            "Maximale verfügbare Menge (3) überschritten!"
        );
    }

    #[test]
    fn test_tables_have_same_keys() {
        for (key, _) in DE {
            assert!(EN.iter().any(|(k, _)| k == key), "missing EN entry for {}", key);
        }
        assert_eq!(DE.len(), EN.len());
    }
}
