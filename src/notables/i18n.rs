//! # Localization
//!
//! Two lookup paths live here and they deliberately do **not** share a fallback policy:
//!
//! - [`resolve`]: personality content (names, bios, birth places, work titles).
//!   Returns the entry for the requested language or an empty string. There is
//!   no fallback to another language; a record with a missing Arabic name shows
//!   nothing in Arabic.
//! - [`Labels::t`]: UI labels. Falls back to the English entry when the active
//!   language lacks the key, and to the key itself when English lacks it too.
//!
//! Whether personality content should also fall back to English is an open
//! product question. Until it is answered, callers must pick the path that
//! matches what they are displaying, and the language is always passed in
//! explicitly.

use crate::model::{Language, LocalizedText};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Resolves a personality field for `language`. Absent entries yield `""`.
pub fn resolve(text: &LocalizedText, language: Language) -> &str {
    text.get(language).unwrap_or("")
}

/// Like [`resolve`], but tolerates a map that is itself undefined.
pub fn resolve_opt(text: Option<&LocalizedText>, language: Language) -> &str {
    text.map(|t| resolve(t, language)).unwrap_or("")
}

/// UI label table, keyed by language then label key.
#[derive(Debug, Default, Clone)]
pub struct Labels {
    tables: HashMap<Language, HashMap<&'static str, &'static str>>,
}

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog shipped with the crate.
    pub fn builtin() -> &'static Labels {
        &BUILTIN
    }

    pub fn insert(&mut self, language: Language, key: &'static str, value: &'static str) {
        self.tables.entry(language).or_default().insert(key, value);
    }

    fn lookup(&self, key: &str, language: Language) -> Option<&'static str> {
        self.tables
            .get(&language)
            .and_then(|table| table.get(key))
            .copied()
    }

    /// Looks up `key`, falling back to English, then to the key itself.
    pub fn t<'a>(&self, key: &'a str, language: Language) -> &'a str {
        self.lookup(key, language)
            .or_else(|| self.lookup(key, Language::En))
            .unwrap_or(key)
    }

    /// Localized relation type (`relation_<type>`), or the raw type when no label exists.
    pub fn relation_label(&self, kind: &str, language: Language) -> String {
        let key = format!("relation_{}", kind);
        match self
            .lookup(&key, language)
            .or_else(|| self.lookup(&key, Language::En))
        {
            Some(label) => label.to_string(),
            None => kind.to_string(),
        }
    }
}

static BUILTIN: Lazy<Labels> = Lazy::new(|| {
    let mut labels = Labels::new();
    for (key, value) in EN {
        labels.insert(Language::En, key, value);
    }
    for (key, value) in FR {
        labels.insert(Language::Fr, key, value);
    }
    for (key, value) in AR {
        labels.insert(Language::Ar, key, value);
    }
    labels
});

const EN: &[(&str, &str)] = &[
    ("main_title", "Notable Personalities"),
    ("main_subtitle", "Discover the people who shaped our history and culture"),
    ("filter_by_domain", "Domain"),
    ("all_domains", "All domains"),
    ("filter_by_birth_year", "Birth year"),
    ("filter_by_death_year", "Death year"),
    ("filter_by_status", "Status"),
    ("status_all", "All"),
    ("status_alive", "Alive"),
    ("status_deceased", "Deceased"),
    ("filter_by_gender", "Gender"),
    ("gender_all", "All"),
    ("gender_male", "Male"),
    ("gender_female", "Female"),
    ("reset_filters", "Reset filters"),
    ("filter_invalid_value", "Unknown filter value."),
    ("pagination_previous", "Previous"),
    ("pagination_next", "Next"),
    ("pagination_page", "Page"),
    ("pagination_of", "of"),
    ("no_results_title", "No results"),
    ("no_results_desc", "Try adjusting your filters."),
    ("back_to_gallery", "Back to gallery"),
    ("born", "Born"),
    ("in", "in"),
    ("died", "Died"),
    ("votes", "votes"),
    ("biography", "Biography"),
    ("notable_works", "Notable works"),
    ("awards", "Awards"),
    ("relations", "Relations"),
    ("media_gallery", "Media gallery"),
    ("external_links", "External links"),
    ("ai_summary_title", "AI summary"),
    ("ai_summary_button", "Generate summary"),
    ("ai_summary_generating", "Generating summary..."),
    ("ai_summary_error", "The summary could not be generated. Please try again later."),
    ("ai_summary_disclaimer", "This summary was generated by AI and may contain errors."),
    ("login_success", "Logged in as administrator."),
    ("login_error", "Invalid username or password."),
    ("logout_success", "Logged out."),
    ("admin_required", "Administrator access is required."),
    ("admin_added", "Personality added successfully!"),
    ("admin_updated", "Personality updated successfully!"),
    ("admin_deleted", "Personality deleted."),
    ("admin_validation_required", "This field is required."),
    ("admin_validation_year", "Please enter a valid four-digit year."),
    ("admin_validation_year_future", "The year cannot be in the future."),
    ("admin_validation_death_year_after_birth", "The death year must be after the birth year."),
    ("admin_validation_url", "Please enter a valid URL."),
    ("rating_thanks", "Thank you for rating!"),
    ("rating_invalid", "Ratings go from 1 to 5 stars."),
    ("not_found", "No personality with this identifier."),
    ("ai_summary_cancelled", "Summary request cancelled."),
    ("shell_select_first", "Open a personality first (show <id>)."),
    ("shell_usage", "Usage:"),
    ("shell_unknown_command", "Unknown command:"),
    ("shell_try_help", "Type help for the list of commands."),
    ("shell_unknown_field", "Unknown filter field:"),
    ("shell_unknown_language", "Unknown language:"),
    ("help_browsing", "Browsing"),
    ("help_admin", "Administration"),
    ("help_other", "Other"),
    ("help_list", "Show the current page"),
    ("help_filter", "Set domain, birth-year, death-year, status or gender"),
    ("help_reset", "Clear all filters"),
    ("help_paging", "Move between pages"),
    ("help_show", "Open a detail page"),
    ("help_close", "Back to the list"),
    ("help_rate", "Rate the open personality"),
    ("help_lang", "Switch display language"),
    ("help_summary", "Request or cancel an AI summary of the open biography"),
    ("help_login", "Start an admin session"),
    ("help_logout", "End it"),
    ("help_search", "Find personalities by name"),
    ("help_add", "Add a personality"),
    ("help_edit", "Replace a personality (same id)"),
    ("help_delete", "Delete a personality"),
    ("help_help", "This text"),
    ("help_quit", "Leave the shell"),
    ("relation_Spouse", "Spouse"),
    ("relation_Child", "Child"),
    ("relation_Parent", "Parent"),
    ("relation_Sibling", "Sibling"),
    ("relation_Mentor", "Mentor"),
    ("relation_Student", "Student"),
    ("relation_Collaborator", "Collaborator"),
];

const FR: &[(&str, &str)] = &[
    ("main_title", "Personnalités marquantes"),
    ("main_subtitle", "Découvrez les personnes qui ont façonné notre histoire et notre culture"),
    ("filter_by_domain", "Domaine"),
    ("all_domains", "Tous les domaines"),
    ("filter_by_birth_year", "Année de naissance"),
    ("filter_by_death_year", "Année de décès"),
    ("filter_by_status", "Statut"),
    ("status_all", "Tous"),
    ("status_alive", "Vivant"),
    ("status_deceased", "Décédé"),
    ("filter_by_gender", "Genre"),
    ("gender_all", "Tous"),
    ("gender_male", "Homme"),
    ("gender_female", "Femme"),
    ("reset_filters", "Réinitialiser"),
    ("filter_invalid_value", "Valeur de filtre inconnue."),
    ("pagination_previous", "Précédent"),
    ("pagination_next", "Suivant"),
    ("no_results_title", "Aucun résultat"),
    ("no_results_desc", "Essayez de modifier vos filtres."),
    ("back_to_gallery", "Retour à la galerie"),
    ("born", "Né(e)"),
    ("in", "à"),
    ("died", "Décédé(e)"),
    ("votes", "votes"),
    ("biography", "Biographie"),
    ("notable_works", "Œuvres notables"),
    ("awards", "Distinctions"),
    ("relations", "Relations"),
    ("media_gallery", "Galerie"),
    ("external_links", "Liens externes"),
    ("ai_summary_title", "Résumé IA"),
    ("ai_summary_button", "Générer un résumé"),
    ("ai_summary_generating", "Génération du résumé..."),
    ("ai_summary_error", "Le résumé n'a pas pu être généré. Veuillez réessayer plus tard."),
    ("ai_summary_disclaimer", "Ce résumé a été généré par une IA et peut contenir des erreurs."),
    ("login_success", "Connecté en tant qu'administrateur."),
    ("login_error", "Nom d'utilisateur ou mot de passe invalide."),
    ("logout_success", "Déconnecté."),
    ("admin_required", "L'accès administrateur est requis."),
    ("admin_added", "Personnalité ajoutée avec succès !"),
    ("admin_updated", "Personnalité mise à jour avec succès !"),
    ("admin_deleted", "Personnalité supprimée."),
    ("admin_validation_required", "Ce champ est obligatoire."),
    ("admin_validation_year", "Veuillez saisir une année valide à quatre chiffres."),
    ("admin_validation_year_future", "L'année ne peut pas être dans le futur."),
    ("admin_validation_death_year_after_birth", "L'année de décès doit être postérieure à l'année de naissance."),
    ("admin_validation_url", "Veuillez saisir une URL valide."),
    ("rating_thanks", "Merci pour votre note !"),
    ("rating_invalid", "Les notes vont de 1 à 5 étoiles."),
    ("not_found", "Aucune personnalité avec cet identifiant."),
    ("ai_summary_cancelled", "Demande de résumé annulée."),
    ("shell_select_first", "Ouvrez d'abord une personnalité (show <id>)."),
    ("shell_usage", "Utilisation :"),
    ("shell_unknown_command", "Commande inconnue :"),
    ("shell_try_help", "Tapez help pour la liste des commandes."),
    ("shell_unknown_field", "Champ de filtre inconnu :"),
    ("shell_unknown_language", "Langue inconnue :"),
    ("help_browsing", "Navigation"),
    ("help_admin", "Administration"),
    ("help_other", "Divers"),
    ("help_list", "Afficher la page courante"),
    ("help_filter", "Filtrer par domaine, naissance, décès, statut ou genre"),
    ("help_reset", "Effacer tous les filtres"),
    ("help_paging", "Changer de page"),
    ("help_show", "Ouvrir une fiche"),
    ("help_close", "Revenir à la liste"),
    ("help_rate", "Noter la personnalité ouverte"),
    ("help_lang", "Changer de langue"),
    ("help_summary", "Demander ou annuler un résumé IA de la biographie ouverte"),
    ("help_login", "Ouvrir une session administrateur"),
    ("help_logout", "La fermer"),
    ("help_search", "Chercher des personnalités par nom"),
    ("help_add", "Ajouter une personnalité"),
    ("help_edit", "Remplacer une personnalité (même id)"),
    ("help_delete", "Supprimer une personnalité"),
    ("help_help", "Ce texte"),
    ("help_quit", "Quitter le shell"),
    ("relation_Spouse", "Conjoint(e)"),
    ("relation_Child", "Enfant"),
    ("relation_Parent", "Parent"),
    ("relation_Sibling", "Frère/Sœur"),
    ("relation_Mentor", "Mentor"),
    ("relation_Student", "Élève"),
    ("relation_Collaborator", "Collaborateur"),
];

const AR: &[(&str, &str)] = &[
    ("main_title", "شخصيات بارزة"),
    ("main_subtitle", "اكتشف الأشخاص الذين صنعوا تاريخنا وثقافتنا"),
    ("filter_by_domain", "المجال"),
    ("all_domains", "كل المجالات"),
    ("filter_by_birth_year", "سنة الميلاد"),
    ("filter_by_death_year", "سنة الوفاة"),
    ("filter_by_status", "الحالة"),
    ("status_all", "الكل"),
    ("status_alive", "على قيد الحياة"),
    ("status_deceased", "متوفى"),
    ("filter_by_gender", "الجنس"),
    ("gender_all", "الكل"),
    ("gender_male", "ذكر"),
    ("gender_female", "أنثى"),
    ("reset_filters", "إعادة تعيين"),
    ("pagination_previous", "السابق"),
    ("pagination_next", "التالي"),
    ("no_results_title", "لا توجد نتائج"),
    ("no_results_desc", "حاول تعديل عوامل التصفية."),
    ("back_to_gallery", "العودة إلى المعرض"),
    ("born", "ولد"),
    ("in", "في"),
    ("died", "توفي"),
    ("biography", "السيرة الذاتية"),
    ("notable_works", "أعمال بارزة"),
    ("awards", "الجوائز"),
    ("relations", "العلاقات"),
    ("media_gallery", "معرض الوسائط"),
    ("external_links", "روابط خارجية"),
    ("ai_summary_title", "ملخص بالذكاء الاصطناعي"),
    ("ai_summary_button", "إنشاء ملخص"),
    ("ai_summary_generating", "جارٍ إنشاء الملخص..."),
    ("ai_summary_error", "تعذر إنشاء الملخص. يرجى المحاولة لاحقًا."),
    ("ai_summary_disclaimer", "تم إنشاء هذا الملخص بواسطة الذكاء الاصطناعي وقد يحتوي على أخطاء."),
    ("login_error", "اسم المستخدم أو كلمة المرور غير صحيحة."),
    ("admin_validation_required", "هذا الحقل مطلوب."),
    ("admin_validation_year", "يرجى إدخال سنة صحيحة من أربعة أرقام."),
    ("admin_validation_year_future", "لا يمكن أن تكون السنة في المستقبل."),
    ("admin_validation_death_year_after_birth", "يجب أن تكون سنة الوفاة بعد سنة الميلاد."),
    ("admin_validation_url", "يرجى إدخال رابط صحيح."),
    ("ai_summary_cancelled", "تم إلغاء طلب الملخص."),
    ("shell_select_first", "افتح شخصية أولاً (show <id>)."),
    ("shell_usage", "الاستخدام:"),
    ("shell_unknown_command", "أمر غير معروف:"),
    ("shell_try_help", "اكتب help لعرض قائمة الأوامر."),
    ("shell_unknown_language", "لغة غير معروفة:"),
    ("help_browsing", "التصفح"),
    ("help_admin", "الإدارة"),
    ("help_other", "أخرى"),
    ("relation_Spouse", "الزوج/الزوجة"),
    ("relation_Child", "الابن/الابنة"),
    ("relation_Mentor", "المرشد"),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> LocalizedText {
        LocalizedText::new()
            .with(Language::En, "Umm Kulthum")
            .with(Language::Fr, "Oum Kalthoum")
    }

    #[test]
    fn resolves_requested_language() {
        assert_eq!(resolve(&name(), Language::Fr), "Oum Kalthoum");
        assert_eq!(resolve(&name(), Language::En), "Umm Kulthum");
    }

    #[test]
    fn personality_fields_do_not_fall_back_to_english() {
        assert_eq!(resolve(&name(), Language::Ar), "");
    }

    #[test]
    fn undefined_map_resolves_to_empty() {
        assert_eq!(resolve_opt(None, Language::En), "");
        assert_eq!(resolve_opt(Some(&name()), Language::En), "Umm Kulthum");
    }

    #[test]
    fn labels_fall_back_to_english() {
        let labels = Labels::builtin();
        assert_eq!(labels.t("pagination_page", Language::Ar), "Page");
        assert_eq!(labels.t("pagination_next", Language::Fr), "Suivant");
    }

    #[test]
    fn unknown_label_yields_key() {
        assert_eq!(Labels::builtin().t("no_such_key", Language::Fr), "no_such_key");
    }

    #[test]
    fn relation_label_falls_back_to_raw_type() {
        let labels = Labels::builtin();
        assert_eq!(labels.relation_label("Mentor", Language::Fr), "Mentor");
        assert_eq!(labels.relation_label("Spouse", Language::Fr), "Conjoint(e)");
        assert_eq!(labels.relation_label("Student", Language::Ar), "Student");
        assert_eq!(labels.relation_label("Rival", Language::En), "Rival");
    }

    #[test]
    fn every_translated_key_exists_in_english() {
        let labels = Labels::builtin();
        for (key, _) in FR.iter().chain(AR.iter()) {
            assert!(
                labels.lookup(key, Language::En).is_some(),
                "missing English label for {}",
                key
            );
        }
    }
}
