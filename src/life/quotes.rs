//! Rotating header quotes and the language they are shown in.

/// How long each quote stays on screen.
pub const QUOTE_ROTATION_MS: f64 = 8000.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    En,
    Tr,
}

impl Language {
    /// Stored value, also shown on the toggle.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Tr => "TR",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "EN" => Some(Language::En),
            "TR" => Some(Language::Tr),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Tr,
            Language::Tr => Language::En,
        }
    }
}

pub struct Quote {
    pub en: &'static str,
    pub tr: &'static str,
}

impl Quote {
    pub fn text(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Tr => self.tr,
        }
    }
}

pub const QUOTES: &[Quote] = &[
    Quote {
        en: "You act like mortals in all that you fear, and like immortals in all that you desire. - Seneca",
        tr: "Korktuğunuz her şeyde ölümlü, arzuladığınız her şeyde ölümsüz gibi davranıyorsunuz. - Seneca",
    },
    Quote {
        en: "It is not that we have a short time to live, but that we waste a lot of it. - Seneca",
        tr: "Yaşayacak kısa bir zamanımız yok, çoğunu boşa harcıyoruz. - Seneca",
    },
    Quote {
        en: "You could leave life right now. Let that determine what you do and say and think. - Marcus Aurelius",
        tr: "Şu an hayattan ayrılabilirsin. Ne yaptığını, ne dediğini ve ne düşündüğünü bu belirlesin. - Marcus Aurelius",
    },
    Quote {
        en: "The future torments us, the past holds us back; the present escapes us. - Gustave Flaubert",
        tr: "Gelecek bize azap çektirir, geçmiş bizi geride tutar; şimdiki zaman ise elimizden kaçar. - Gustave Flaubert",
    },
    Quote {
        en: "Time is the most valuable thing a man can spend. - Theophrastus",
        tr: "Zaman, bir insanın harcayabileceği en değerli şeydir. - Theophrastus",
    },
    Quote {
        en: "Lost time is never found again. - Benjamin Franklin",
        tr: "Kaybedilen zaman asla geri gelmez. - Benjamin Franklin",
    },
    Quote {
        en: "Your time is limited, so don't waste it living someone else's life. - Steve Jobs",
        tr: "Zamanınız kısıtlı, bu yüzden başkasının hayatını yaşayarak onu harcamayın. - Steve Jobs",
    },
];

/// Advance the rotation by `steps`, wrapping at the end of the list.
pub fn advance_quote(index: usize, steps: u32) -> usize {
    (index + steps as usize) % QUOTES.len()
}

pub fn quote_text(index: usize, language: Language) -> &'static str {
    QUOTES[index % QUOTES.len()].text(language)
}
