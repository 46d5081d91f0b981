//! Mechanics delegated to an external embedded document.
//!
//! These share no state with the playground; the client only renders a
//! panel naming the external page.

pub struct ExternalPanel {
    pub title: &'static str,
    pub document: &'static str,
}

pub const CHROMATIC_DEFENSE: ExternalPanel = ExternalPanel {
    title: "Defesa Cromática",
    document: "defesa-cromatica.html",
};
