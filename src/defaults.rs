//! Built-in defaults for the generation flows.
//!
//! These mirror the stock Pantheon session layout. The generators take
//! them as explicit arguments; the CLI substitutes them when the
//! corresponding flag or component list is not given.

pub const REPO_URL: &str = "https://github.com/elementary/session-settings";
pub const REPO_PATH: &str = "upstream";

pub const AUTOSTART_ORIGIN: &str = "/etc/xdg/autostart";
pub const AUTOSTART_SUFFIX: &str = "-pantheon";

pub const SESSION_FILE_NAME: &str = "pantheon.session";
pub const XSESSION_FILE_NAME: &str = "pantheon.desktop";
pub const DEFAULTS_LIST_NAME: &str = "defaults.list";
pub const MAPPINGS_FILE: &str = "distribution-mappings.json";

/// Autostart entries generated when no components are given on the
/// command line.
pub const AUTOSTART_COMPONENTS: &[&str] = &[
    "gnome-keyring-pkcs11.desktop",
    "gnome-keyring-secrets.desktop",
    "gnome-keyring-ssh.desktop",
    "orca-autostart.desktop",
    "org.gnome.SettingsDaemon.A11ySettings.desktop",
    "org.gnome.SettingsDaemon.Color.desktop",
    "org.gnome.SettingsDaemon.Datetime.desktop",
    "org.gnome.SettingsDaemon.DiskUtilityNotify.desktop",
    "org.gnome.SettingsDaemon.Housekeeping.desktop",
    "org.gnome.SettingsDaemon.Keyboard.desktop",
    "org.gnome.SettingsDaemon.MediaKeys.desktop",
    "org.gnome.SettingsDaemon.Power.desktop",
    "org.gnome.SettingsDaemon.PrintNotifications.desktop",
    "org.gnome.SettingsDaemon.Rfkill.desktop",
    "org.gnome.SettingsDaemon.Sharing.desktop",
    "org.gnome.SettingsDaemon.Smartcard.desktop",
    "org.gnome.SettingsDaemon.Sound.desktop",
    "org.gnome.SettingsDaemon.Wacom.desktop",
    "org.gnome.SettingsDaemon.Wwan.desktop",
    "org.gnome.SettingsDaemon.XSettings.desktop",
    "user-dirs-update-gtk.desktop",
];

/// Components expected in the session descriptor's
/// `RequiredComponents` list, as shipped upstream.
pub const SESSION_COMPONENTS: &[&str] = &[
    "gala",
    "gala-daemon",
    "org.gnome.SettingsDaemon.A11ySettings",
    "org.gnome.SettingsDaemon.Color",
    "org.gnome.SettingsDaemon.Datetime",
    "org.gnome.SettingsDaemon.DiskUtilityNotify.desktop",
    "org.gnome.SettingsDaemon.Housekeeping",
    "org.gnome.SettingsDaemon.Keyboard",
    "org.gnome.SettingsDaemon.MediaKeys",
    "org.gnome.SettingsDaemon.Power",
    "org.gnome.SettingsDaemon.PrintNotifications",
    "org.gnome.SettingsDaemon.Rfkill",
    "org.gnome.SettingsDaemon.Sharing",
    "org.gnome.SettingsDaemon.Smartcard",
    "org.gnome.SettingsDaemon.Sound",
    "org.gnome.SettingsDaemon.Wwan",
    "org.gnome.SettingsDaemon.Wacom",
    "org.gnome.SettingsDaemon.XSettings",
];
