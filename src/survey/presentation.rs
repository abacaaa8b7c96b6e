use serde::{Deserialize, Serialize};

use super::label::Label;
use super::questions::{questionnaire, Question};
use crate::config::{DocumentLinks, SocialLink};

pub const THANK_YOU_HEADING: &str = "¡Gracias por completar el diagnóstico!";
pub const GUIDE_READY_HEADING: &str = "Tu guía personalizada está lista";
pub const GUIDE_READY_TEXT: &str = "Accede a tu documento con los siguientes pasos recomendados:";
pub const GUIDE_CALL_TO_ACTION: &str = "Ver mi guía ahora →";
pub const FOLLOW_UP_NOTE: &str = "En los próximos minutos recibirás más información en tu correo.";
pub const SOCIAL_HEADING: &str = "Síguenos en nuestras redes:";
pub const LOADING_MESSAGE: &str = "Procesando tu información...";
pub const FORM_TITLE: &str = "Diagnóstico Personalizado";
pub const FORM_SUBTITLE: &str = "Completa este cuestionario para recibir tu guía personalizada";
pub const SUBMIT_LABEL: &str = "Enviar diagnóstico";

/// Static copy and questions for the form screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormView {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub name_label: &'static str,
    pub email_label: &'static str,
    pub submit_label: &'static str,
    pub loading_message: &'static str,
    pub questions: &'static [Question],
}

pub fn form_view() -> FormView {
    FormView {
        title: FORM_TITLE,
        subtitle: FORM_SUBTITLE,
        name_label: "Nombre completo",
        email_label: "Correo electrónico",
        submit_label: SUBMIT_LABEL,
        loading_message: LOADING_MESSAGE,
        questions: questionnaire(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileMessage {
    pub title: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

pub fn profile_message(label: Label) -> ProfileMessage {
    match label {
        Label::Confused => ProfileMessage {
            title: "Tu perfil: CONFUNDIDO",
            description: "Necesitas claridad y un plan claro. Te recomendamos empezar con una estructura simple y validar tu idea antes de invertir tiempo.",
            emoji: "🧭",
        },
        Label::Overwhelmed => ProfileMessage {
            title: "Tu perfil: SATURADO",
            description: "Tienes ideas pero necesitas organización. Prioriza una sola idea y crea un plan de acción semanal.",
            emoji: "📊",
        },
        Label::Stuck => ProfileMessage {
            title: "Tu perfil: PARALIZADO",
            description: "Es momento de replantearte tu estrategia. Analiza qué falló y ajusta tu enfoque con mentoría.",
            emoji: "🚀",
        },
        Label::Unknown => ProfileMessage {
            title: "Tu perfil",
            description: "Hemos preparado una guía especial para ti.",
            emoji: "✨",
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationContent {
    pub title: String,
    pub description: String,
    pub emoji: String,
    pub document_link: String,
}

/// Everything the thank-you screen renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThankYouView {
    pub heading: String,
    pub profile: PresentationContent,
    pub guide_heading: String,
    pub guide_text: String,
    pub call_to_action: String,
    pub follow_up: String,
    pub social_heading: String,
    pub social_links: Vec<SocialLink>,
}

/// Maps a label to the personalised content and guide link.
#[derive(Debug, Clone)]
pub struct PresentationSelector {
    links: DocumentLinks,
    social_links: Vec<SocialLink>,
}

impl PresentationSelector {
    pub fn new(links: DocumentLinks, social_links: Vec<SocialLink>) -> Self {
        Self { links, social_links }
    }

    pub fn document_link(&self, label: Label) -> &str {
        self.links.for_label(label)
    }

    /// Whether `url` is one of the guide or social links this selector hands out.
    pub fn is_known_link(&self, url: &str) -> bool {
        let links = &self.links;
        [&links.confused, &links.overwhelmed, &links.stuck, &links.general]
            .iter()
            .any(|link| link.as_str() == url)
            || self.social_links.iter().any(|link| link.url == url)
    }

    pub fn content(&self, label: Label) -> PresentationContent {
        let message = profile_message(label);
        PresentationContent {
            title: message.title.to_string(),
            description: message.description.to_string(),
            emoji: message.emoji.to_string(),
            document_link: self.document_link(label).to_string(),
        }
    }

    pub fn thank_you(&self, label: Label) -> ThankYouView {
        ThankYouView {
            heading: THANK_YOU_HEADING.to_string(),
            profile: self.content(label),
            guide_heading: GUIDE_READY_HEADING.to_string(),
            guide_text: GUIDE_READY_TEXT.to_string(),
            call_to_action: GUIDE_CALL_TO_ACTION.to_string(),
            follow_up: FOLLOW_UP_NOTE.to_string(),
            social_heading: SOCIAL_HEADING.to_string(),
            social_links: self.social_links.clone(),
        }
    }
}

impl Default for PresentationSelector {
    fn default() -> Self {
        Self::new(DocumentLinks::default(), crate::config::default_social_links())
    }
}
