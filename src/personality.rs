/// Shown for labels the service returns that have no entry below.
pub const FALLBACK_DESCRIPTION: &str = "Bu kişilik tipi için henüz açıklama mevcut değil.";

/// Personality types the Random Forest service is trained to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PersonalityType {
    AnalyticalThinker,
    SocialLeader,
    CreativeAdventurer,
    HarmoniousSupporter,
    OrganizedPlanner,
}

impl PersonalityType {
    pub const ALL: [PersonalityType; 5] = [
        PersonalityType::AnalyticalThinker,
        PersonalityType::SocialLeader,
        PersonalityType::CreativeAdventurer,
        PersonalityType::HarmoniousSupporter,
        PersonalityType::OrganizedPlanner,
    ];

    /// Label exactly as it appears in `prediction` and probability keys.
    pub fn label(&self) -> &'static str {
        match self {
            PersonalityType::AnalyticalThinker => "Analitik Düşünür",
            PersonalityType::SocialLeader => "Sosyal Lider",
            PersonalityType::CreativeAdventurer => "Yaratıcı Maceracı",
            PersonalityType::HarmoniousSupporter => "Uyumlu Destekçi",
            PersonalityType::OrganizedPlanner => "Organize Planlayıcı",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PersonalityType::AnalyticalThinker => "Detaylara odaklanan, sistematik düşünen ve problem çözme konusunda yetenekli bir kişiliğe sahipsiniz.",
            PersonalityType::SocialLeader => "İnsanlarla iletişim kurmakta başarılı, liderlik özelliklerine sahip ve sosyal bir kişiliğiniz var.",
            PersonalityType::CreativeAdventurer => "Yenilikçi, yaratıcı düşünce yapısına sahip ve yeni deneyimlere açık bir kişiliğiniz bulunuyor.",
            PersonalityType::HarmoniousSupporter => "Empati kurabilen, işbirlikçi ve başkalarının ihtiyaçlarını önemseyen bir kişiliğe sahipsiniz.",
            PersonalityType::OrganizedPlanner => "Düzenli, planlı ve sorumluluk sahibi bir yaklaşımla hayata bakan bir kişiliğiniz var.",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        PersonalityType::ALL.into_iter().find(|t| t.label() == label)
    }
}

pub fn describe(label: &str) -> &'static str {
    PersonalityType::from_label(label)
        .map(|t| t.description())
        .unwrap_or(FALLBACK_DESCRIPTION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_have_descriptions() {
        for t in PersonalityType::ALL {
            assert_eq!(PersonalityType::from_label(t.label()), Some(t));
            assert!(!describe(t.label()).is_empty());
            assert_ne!(describe(t.label()), FALLBACK_DESCRIPTION);
        }
    }

    #[test]
    fn unknown_labels_fall_back() {
        for label in ["", "Küme 7", "organize planlayıcı", "Sosyal Lider "] {
            assert_eq!(describe(label), FALLBACK_DESCRIPTION);
        }
    }
}
