//! Internationalization (i18n) module.
//!
//! Provides localized strings for the CLI help and the operator menu.
//! English is the default language; Spanish is available as an alternative.
//! Parcel data itself (ids, names, status values) is never translated.

use std::sync::OnceLock;

static CURRENT_LANG: OnceLock<Lang> = OnceLock::new();

/// Supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    /// English (default)
    En,
    /// Spanish
    Es,
}

impl Lang {
    /// Parse a language code string (e.g. "en", "es", "en_US", "es_ES").
    /// Returns `None` for unrecognized codes.
    pub fn from_code(code: &str) -> Option<Self> {
        let normalized = code.to_lowercase();
        let prefix = normalized.split(['_', '-', '.']).next().unwrap_or("");
        match prefix {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// Return the ISO 639-1 code for this language.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

/// Initialize the global language. Call once at startup.
/// If already initialized, this is a no-op.
pub fn set_lang(lang: Lang) {
    let _ = CURRENT_LANG.set(lang);
}

/// Get the currently configured language (defaults to English).
pub fn lang() -> Lang {
    CURRENT_LANG.get().copied().unwrap_or(Lang::En)
}

/// Detect language from the `PARCELSHELL_LANG` / `LC_MESSAGES` / `LANG`
/// environment variables.
pub fn detect_system_lang() -> Lang {
    std::env::var("PARCELSHELL_LANG")
        .ok()
        .and_then(|v| Lang::from_code(&v))
        .or_else(|| {
            std::env::var("LC_MESSAGES")
                .ok()
                .and_then(|v| Lang::from_code(&v))
        })
        .or_else(|| std::env::var("LANG").ok().and_then(|v| Lang::from_code(&v)))
        .unwrap_or(Lang::En)
}

/// Macro for defining translatable message functions.
/// Each function returns a `&'static str` based on the current language.
macro_rules! msg {
    ($name:ident, $en:expr, $es:expr) => {
        /// Returns a localized string for the current language.
        pub fn $name() -> &'static str {
            match lang() {
                Lang::En => $en,
                Lang::Es => $es,
            }
        }
    };
}

// ── General ──────────────────────────────────────────────────────

msg!(app_name, "parcelShell", "parcelShell");
msg!(
    app_about,
    "parcelShell \u{2014} Interactive terminal manager for courier parcels.",
    "parcelShell \u{2014} Gestor interactivo de paquetes de mensajer\u{ed}a para la terminal."
);
msg!(
    app_long_about,
    "parcelShell \u{2014} Interactive terminal manager for courier parcels.\nAdd, track, search and sort shipments from a numbered menu.\nRecords live in memory for the duration of the session.",
    "parcelShell \u{2014} Gestor interactivo de paquetes de mensajer\u{ed}a para la terminal.\nA\u{f1}ade, rastrea, busca y ordena env\u{ed}os desde un men\u{fa} numerado.\nLos registros viven en memoria durante la sesi\u{f3}n."
);
msg!(
    app_after_help,
    "MIT License",
    "Licencia MIT"
);

// ── CLI help strings ─────────────────────────────────────────────

msg!(
    help_verbose,
    "Verbose logging (-v info, -vv debug, -vvv trace)",
    "Registro detallado (-v info, -vv debug, -vvv trace)"
);
msg!(
    help_lang,
    "Language (en, es). Defaults to system locale",
    "Idioma (en, es). Por defecto usa el idioma del sistema"
);
msg!(
    help_no_seed,
    "Start with an empty parcel list",
    "Empezar con la lista de paquetes vac\u{ed}a"
);
msg!(
    help_json,
    "Print listings as JSON lines",
    "Mostrar los listados como l\u{ed}neas JSON"
);
msg!(
    help_cmd_shell,
    "Run the interactive menu (default if no subcommand given)",
    "Ejecutar el men\u{fa} interactivo (por defecto si no se da subcomando)"
);
msg!(
    help_cmd_completions,
    "Generate shell completions",
    "Generar completions para tu shell"
);
msg!(
    help_cmd_manpage,
    "Generate a man page",
    "Generar p\u{e1}gina de manual"
);

// ── Menu ─────────────────────────────────────────────────────────

msg!(
    menu_title,
    "Courier Parcel Management System",
    "Sistema de Gesti\u{f3}n de Paquetes"
);
msg!(menu_add, "Add Parcel", "A\u{f1}adir paquete");
msg!(menu_delete, "Delete Parcel", "Eliminar paquete");
msg!(
    menu_update,
    "Update Parcel Status",
    "Actualizar estado del paquete"
);
msg!(menu_search, "Search Parcel", "Buscar paquete");
msg!(menu_sort, "Sort Parcels", "Ordenar paquetes");
msg!(menu_pop, "Pop from Stack", "Sacar de la pila");
msg!(menu_display, "Display Parcels", "Mostrar paquetes");
msg!(menu_exit, "Exit", "Salir");
msg!(prompt_choice, "Choose an option: ", "Elige una opci\u{f3}n: ");

// ── Prompts ──────────────────────────────────────────────────────

msg!(prompt_parcel_id, "Enter Parcel ID: ", "Introduce el ID del paquete: ");
msg!(prompt_sender, "Enter Sender: ", "Introduce el remitente: ");
msg!(prompt_receiver, "Enter Receiver: ", "Introduce el destinatario: ");
msg!(prompt_status, "Enter status", "Introduce el estado");
msg!(
    prompt_valid_status,
    "Enter a valid status: ",
    "Introduce un estado v\u{e1}lido: "
);
msg!(
    prompt_delete_id,
    "Enter Parcel ID to delete: ",
    "Introduce el ID del paquete a eliminar: "
);
msg!(
    prompt_update_id,
    "Enter Parcel ID to update: ",
    "Introduce el ID del paquete a actualizar: "
);
msg!(prompt_new_status, "Enter new status: ", "Introduce el nuevo estado: ");
msg!(
    prompt_search_id,
    "Enter Parcel ID to search: ",
    "Introduce el ID del paquete a buscar: "
);
msg!(
    prompt_sort_criteria,
    "Enter sorting criteria (sender, receiver, status): ",
    "Introduce el criterio de orden (sender, receiver, status): "
);

// ── Outcomes ─────────────────────────────────────────────────────

msg!(msg_parcel_added, "Parcel added", "Paquete a\u{f1}adido");
msg!(msg_parcel_removed, "Parcel removed", "Paquete eliminado");
msg!(
    msg_status_updated,
    "Parcel status updated",
    "Estado del paquete actualizado"
);
msg!(msg_parcel_found, "Parcel Found", "Paquete encontrado");
msg!(
    msg_last_removed,
    "Last parcel removed",
    "\u{da}ltimo paquete eliminado"
);
msg!(msg_sorted_by, "Parcels sorted by", "Paquetes ordenados por");
msg!(msg_no_sorting, "No sorting needed.", "No hace falta ordenar.");
msg!(msg_exiting, "Exiting system.", "Saliendo del sistema.");
msg!(
    msg_invalid_option,
    "Invalid option. Try again.",
    "Opci\u{f3}n no v\u{e1}lida. Int\u{e9}ntalo de nuevo."
);

// ── Table columns ────────────────────────────────────────────────

msg!(col_id, "ID", "ID");
msg!(col_sender, "Sender", "Remitente");
msg!(col_receiver, "Receiver", "Destinatario");
msg!(col_status, "Status", "Estado");

// ── Errors ───────────────────────────────────────────────────────

msg!(
    err_list_empty,
    "Parcel list is empty.",
    "La lista de paquetes est\u{e1} vac\u{ed}a."
);
msg!(err_not_found, "Parcel not found", "Paquete no encontrado");
msg!(
    err_invalid_status,
    "Invalid status. Allowed statuses",
    "Estado no v\u{e1}lido. Estados permitidos"
);
msg!(
    err_invalid_criteria,
    "Invalid sorting criteria. Available options",
    "Criterio de orden no v\u{e1}lido. Opciones disponibles"
);
msg!(
    err_duplicate_id,
    "Parcel already exists",
    "El paquete ya existe"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_from_code() {
        assert_eq!(Lang::from_code("en"), Some(Lang::En));
        assert_eq!(Lang::from_code("es"), Some(Lang::Es));
        assert_eq!(Lang::from_code("en_US"), Some(Lang::En));
        assert_eq!(Lang::from_code("es_ES.UTF-8"), Some(Lang::Es));
        assert_eq!(Lang::from_code("es-MX"), Some(Lang::Es));
        assert_eq!(Lang::from_code("fr"), None);
    }

    #[test]
    fn test_lang_code_roundtrip() {
        assert_eq!(Lang::En.code(), "en");
        assert_eq!(Lang::Es.code(), "es");
    }

    #[test]
    fn test_messages_return_strings() {
        assert!(!app_name().is_empty());
        assert!(!menu_title().is_empty());
        assert!(!err_invalid_status().is_empty());
        assert!(prompt_choice().ends_with(' '));
    }
}
