use std::fmt;
use std::str::FromStr;

/// Builds a static slice of [`TranslationEntry`] from `"key" => "value"` pairs,
/// keeping declaration order.
macro_rules! catalog {
    ($($key:literal => $value:literal),* $(,)?) => {
        &[$(TranslationEntry::new($key, $value)),*]
    };
}

/// Target locales of the app being localized, in emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    French,
    German,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::French, Locale::German];

    pub fn code(self) -> &'static str {
        match self {
            Locale::French => "fr",
            Locale::German => "de",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::ALL
            .into_iter()
            .find(|locale| locale.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unsupported locale: {}", s))
    }
}

/// One key/template pair. Values are stored exactly as they must be pasted,
/// so `{name}` placeholders and the two-character `\n` sequence stay as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationEntry<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> TranslationEntry<'a> {
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleCatalog<'a> {
    pub locale: Locale,
    pub entries: &'a [TranslationEntry<'a>],
}

impl<'a> LocaleCatalog<'a> {
    pub fn new(locale: Locale, entries: &'a [TranslationEntry<'a>]) -> Self {
        Self { locale, entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value)
    }
}

pub fn catalog(locale: Locale) -> LocaleCatalog<'static> {
    match locale {
        Locale::French => LocaleCatalog::new(Locale::French, FRENCH),
        Locale::German => LocaleCatalog::new(Locale::German, GERMAN),
    }
}

/// Every embedded catalog, French first.
pub fn catalogs() -> Vec<LocaleCatalog<'static>> {
    Locale::ALL.into_iter().map(catalog).collect()
}

pub static FRENCH: &[TranslationEntry<'static>] = catalog![
    // Settings
    "appearance" => "Apparence",
    "theme" => "Thème",
    "lightTheme" => "Clair",
    "darkTheme" => "Mode sombre",
    "systemTheme" => "Système",
    "notifications" => "Notifications",
    "eventNotifications" => "Rappels d'événements",
    "challengeNotifications" => "Notifications motivationnelles",
    "sound" => "Son",
    "vibration" => "Vibration",
    "about" => "À propos",
    "version" => "Version",
    "advancedSettings" => "Paramètres avancés",
    "eventFrequency" => "Fréquence de vérification des événements",
    "challengeFrequency" => "Fréquence de vérification des défis",
    "systemStatus" => "État du système",
    "notificationInfo" => "À propos des notifications",
    "soundEnabled" => "Jouer le son avec les notifications",
    "vibrationEnabled" => "Faire vibrer l'appareil avec les notifications",
    "themeDescription" => "Basculer entre thème clair et sombre",

    // Snackbar messages for settings changes
    "eventsActivated" => "✅ Notifications d'événements activées",
    "eventsDeactivated" => "🔕 Notifications d'événements désactivées",
    "challengesActivated" => "✅ Notifications de défis activées",
    "challengesDeactivated" => "🔕 Notifications de défis désactivées",
    "soundActivated" => "🔊 Son activé",
    "soundDeactivated" => "🔇 Son désactivé",
    "vibrationActivated" => "📳 Vibration activée",
    "vibrationDeactivated" => "📴 Vibration désactivée",
    "eventFrequencyChanged" => "⏱️ Fréquence d'événements: toutes les {frequency} minutes",
    "challengeFrequencyChanged" => "🎯 Fréquence de défis: toutes les {frequency} heures",
    "languageChanged" => "🌍 Langue changée: {language}",
    "testNotificationSent" => "🔔 Notification de test envoyée",

    // Notification subtitles
    "eventNotificationSubtitleEnabled" => "Le système vérifie les événements toutes les {frequency} minutes pour envoyer des rappels opportuns",
    "eventNotificationSubtitleDisabled" => "Vous ne recevrez pas de rappels d'événements",
    "challengeNotificationSubtitleEnabled" => "Le système vérifie les réussites toutes les {frequency} heures pour envoyer la motivation",
    "challengeNotificationSubtitleDisabled" => "Vous ne recevrez pas de notifications motivationnelles",

    // Notification info dialog
    "notificationInfoTitle" => "📱 Informations sur les notifications",
    "eventRemindersTitle" => "📅 Rappels d'événements:",
    "eventRemindersDescription" => "• Vous ne recevez des notifications qu'aux moments clés: 30j, 15j, 7j, 3j, 1j avant et le jour de l'événement\\n• Le système vérifie périodiquement mais n'envoie PAS de spam",
    "motivationalNotificationsTitle" => "🎯 Notifications motivationnelles:",
    "motivationalNotificationsDescription" => "• Seulement quand vous atteignez des jalons: jour 1, jour 3, semaine 1, 2 semaines, mois 1, etc.\\n• Système anti-spam: chaque réussite n'est notifiée qu'UNE fois",
    "verificationFrequencyTitle" => "⚙️ Fréquence de vérification:",
    "verificationFrequencyDescription" => "• Contrôle la fréquence à laquelle le système recherche de nouveaux rappels\\n• Ne contrôle PAS la fréquence des notifications reçues\\n• Plus fréquent = détection plus rapide des événements à venir",
    "understood" => "Compris",

    // System status dialog
    "systemStatusTitle" => "🔧 État du système",
    "eventSystemTitle" => "📅 Système d'événements:",
    "challengeSystemTitle" => "🎯 Système de défis:",
    "audioConfigTitle" => "🔊 Configuration audio:",
    "systemActive" => "✅ En cours",
    "systemInactive" => "❌ Arrêté",
    "frequencyEvery" => "Toutes les {frequency}",
    "minutesUnit" => "minutes",
    "hoursUnit" => "heures",
    "soundEnabledStatus" => "✅ Activé",
    "soundDisabledStatus" => "❌ Désactivé",
    "vibrationEnabledStatus" => "✅ Activée",
    "vibrationDisabledStatus" => "❌ Désactivée",
    "close" => "Fermer",
    "test" => "Tester",
    "testNotificationTitle" => "🧪 Test du système",
    "testNotificationBody" => "Le système de notification fonctionne correctement.",

    // General system status
    "eventsStatus" => "Événements",
    "challengesStatus" => "Défis",
    "active" => "✅ Actif",
    "inactive" => "❌ Inactif",
    "howNotificationsWork" => "Comment fonctionnent les rappels",
];

pub static GERMAN: &[TranslationEntry<'static>] = catalog![
    // Settings
    "appearance" => "Aussehen",
    "theme" => "Thema",
    "lightTheme" => "Hell",
    "darkTheme" => "Dunkler Modus",
    "systemTheme" => "System",
    "notifications" => "Benachrichtigungen",
    "eventNotifications" => "Ereigniserinnerungen",
    "challengeNotifications" => "Motivierende Benachrichtigungen",
    "sound" => "Ton",
    "vibration" => "Vibration",
    "about" => "Über",
    "version" => "Version",
    "advancedSettings" => "Erweiterte Einstellungen",
    "eventFrequency" => "Ereignisprüffrequenz",
    "challengeFrequency" => "Challenge-Prüffrequenz",
    "systemStatus" => "Systemstatus",
    "notificationInfo" => "Über Benachrichtigungen",
    "soundEnabled" => "Ton bei Benachrichtigungen abspielen",
    "vibrationEnabled" => "Gerät bei Benachrichtigungen vibrieren lassen",
    "themeDescription" => "Zwischen hellem und dunklem Thema wechseln",

    // Snackbar messages for settings changes
    "eventsActivated" => "✅ Ereignisbenachrichtigungen aktiviert",
    "eventsDeactivated" => "🔕 Ereignisbenachrichtigungen deaktiviert",
    "challengesActivated" => "✅ Challenge-Benachrichtigungen aktiviert",
    "challengesDeactivated" => "🔕 Challenge-Benachrichtigungen deaktiviert",
    "soundActivated" => "🔊 Ton aktiviert",
    "soundDeactivated" => "🔇 Ton deaktiviert",
    "vibrationActivated" => "📳 Vibration aktiviert",
    "vibrationDeactivated" => "📴 Vibration deaktiviert",
    "eventFrequencyChanged" => "⏱️ Ereignisfrequenz: alle {frequency} Minuten",
    "challengeFrequencyChanged" => "🎯 Challenge-Frequenz: alle {frequency} Stunden",
    "languageChanged" => "🌍 Sprache geändert: {language}",
    "testNotificationSent" => "🔔 Testbenachrichtigung gesendet",

    // Notification subtitles
    "eventNotificationSubtitleEnabled" => "System prüft Ereignisse alle {frequency} Minuten für rechtzeitige Erinnerungen",
    "eventNotificationSubtitleDisabled" => "Sie erhalten keine Ereigniserinnerungen",
    "challengeNotificationSubtitleEnabled" => "System prüft Erfolge alle {frequency} Stunden für Motivation",
    "challengeNotificationSubtitleDisabled" => "Sie erhalten keine motivierenden Benachrichtigungen",

    // Notification info dialog
    "notificationInfoTitle" => "📱 Benachrichtigungsinformationen",
    "eventRemindersTitle" => "📅 Ereigniserinnerungen:",
    "eventRemindersDescription" => "• Sie erhalten nur zu wichtigen Zeitpunkten Benachrichtigungen: 30T, 15T, 7T, 3T, 1T vorher und am Ereignistag\\n• Das System prüft regelmäßig, sendet aber KEINEN Spam",
    "motivationalNotificationsTitle" => "🎯 Motivierende Benachrichtigungen:",
    "motivationalNotificationsDescription" => "• Nur bei Meilensteinen: Tag 1, Tag 3, Woche 1, 2 Wochen, Monat 1, etc.\\n• Anti-Spam-System: jeder Erfolg wird nur EINMAL benachrichtigt",
    "verificationFrequencyTitle" => "⚙️ Prüffrequenz:",
    "verificationFrequencyDescription" => "• Steuert, wie oft das System nach neuen Erinnerungen sucht\\n• Steuert NICHT die Häufigkeit empfangener Benachrichtigungen\\n• Häufiger = schnellere Erkennung bevorstehender Ereignisse",
    "understood" => "Verstanden",

    // System status dialog
    "systemStatusTitle" => "🔧 Systemstatus",
    "eventSystemTitle" => "📅 Ereignissystem:",
    "challengeSystemTitle" => "🎯 Challenge-System:",
    "audioConfigTitle" => "🔊 Audiokonfiguration:",
    "systemActive" => "✅ Läuft",
    "systemInactive" => "❌ Gestoppt",
    "frequencyEvery" => "Alle {frequency}",
    "minutesUnit" => "Minuten",
    "hoursUnit" => "Stunden",
    "soundEnabledStatus" => "✅ Aktiviert",
    "soundDisabledStatus" => "❌ Deaktiviert",
    "vibrationEnabledStatus" => "✅ Aktiviert",
    "vibrationDisabledStatus" => "❌ Deaktiviert",
    "close" => "Schließen",
    "test" => "Testen",
    "testNotificationTitle" => "🧪 Systemtest",
    "testNotificationBody" => "Das Benachrichtigungssystem funktioniert korrekt.",

    // General system status
    "eventsStatus" => "Ereignisse",
    "challengesStatus" => "Challenges",
    "active" => "✅ Aktiv",
    "inactive" => "❌ Inaktiv",
    "howNotificationsWork" => "Wie Erinnerungen funktionieren",
];
