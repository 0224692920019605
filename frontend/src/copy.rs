//! Fixed copy for every locale.
//!
//! The panel defaults, the confirmation line and all decorative text
//! live here so that the English and French panels are the same
//! component with a different copy set.

use crate::types::Locale;

/// A `{label, value}` pair as written in the default copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MetricCopy {
    pub label: &'static str,
    pub value: &'static str,
}

/// A card in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCopy {
    pub title: &'static str,
    pub badge: &'static str,
    pub desc: &'static str,
}

/// A step of the workflow timeline.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepCopy {
    pub title: &'static str,
    pub desc: &'static str,
}

/// Every fixed string the panel can render for one locale.
#[derive(Debug, PartialEq, Eq)]
pub struct LocaleCopy {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub highlight: &'static str,
    pub bullets: [&'static str; 3],
    pub metrics: [MetricCopy; 3],
    pub cta_label: &'static str,
    pub cta_hint: &'static str,
    pub confirmation: &'static str,
    pub logo: &'static str,
    pub nav_pills: [&'static str; 2],
    pub visual_eyebrow: &'static str,
    pub visual_title: &'static str,
    pub visual_text: &'static str,
    pub visual_chips: [&'static str; 3],
    pub features: [FeatureCopy; 3],
    pub timeline_label: &'static str,
    pub steps: [StepCopy; 3],
}

impl LocaleCopy {
    /// Copy set for `locale`.
    pub fn for_locale(locale: Locale) -> &'static LocaleCopy {
        match locale {
            Locale::En => &ENGLISH,
            Locale::Fr => &FRENCH,
        }
    }
}

static ENGLISH: LocaleCopy = LocaleCopy {
    title: "Iris Predictor Studio",
    subtitle: "Follow the Iris journey even without a data background: understand the data, \
               watch the training process, then try a prediction in two clicks.",
    highlight: "Guided tour",
    bullets: [
        "Glance at the Iris dataset through a couple of easy-to-read charts",
        "Follow the learning process with a short, step-by-step explanation",
        "Try a prediction without knowing anything about machine learning",
    ],
    metrics: [
        MetricCopy { label: "Accuracy CV", value: "0.97 ± 0.02" },
        MetricCopy { label: "F1-macro CV", value: "0.97 ± 0.02" },
        MetricCopy { label: "Prediction time", value: "< 10 ms" },
    ],
    cta_label: "Open the prediction form",
    cta_hint: "Instant demo, no installation needed",
    confirmation: "The prediction form is now available just below ↓",
    logo: "Iris Predictor",
    nav_pills: ["LogReg Pipeline", "Streamlit + Rust"],
    visual_eyebrow: "Pipeline Iris",
    visual_title: "Logistic Regression",
    visual_text: "We clean the measurements, standardize the data, and train a reliable logistic \
                  regression to separate the three species.",
    visual_chips: ["Accuracy 97%", "F1-macro 97%", "Hold-out 93%"],
    features: [
        FeatureCopy {
            title: "Guided discovery",
            badge: "Explore",
            desc: "A handful of charts is all you need to understand what separates each species.",
        },
        FeatureCopy {
            title: "One-click actions",
            badge: "Scripts",
            desc: "Train, evaluate, or infer from the command line without extra setup.",
        },
        FeatureCopy {
            title: "Live interface",
            badge: "Demo",
            desc: "Type the measurements and the page returns the most likely Iris species.",
        },
    ],
    timeline_label: "Full workflow",
    steps: [
        StepCopy {
            title: "Explore",
            desc: "Start from the Iris dataset and highlight the main trends visually.",
        },
        StepCopy {
            title: "Validate",
            desc: "Train the model, check the metrics, and compare with hold-out samples.",
        },
        StepCopy {
            title: "Share",
            desc: "Use the Streamlit interface to demo the solution like a real product.",
        },
    ],
};

static FRENCH: LocaleCopy = LocaleCopy {
    title: "Iris Predictor Studio",
    subtitle: "Suivez le parcours Iris même sans bagage en data : comprenez les données, \
               observez l'entraînement, puis testez une prédiction en deux clics.",
    highlight: "Visite guidée",
    bullets: [
        "Découvrez le dataset Iris en quelques graphiques faciles à lire",
        "Suivez l'apprentissage grâce à une explication courte, étape par étape",
        "Testez une prédiction sans rien connaître au machine learning",
    ],
    metrics: [
        MetricCopy { label: "Accuracy CV", value: "0,97 ± 0,02" },
        MetricCopy { label: "F1-macro CV", value: "0,97 ± 0,02" },
        MetricCopy { label: "Temps de prédiction", value: "< 10 ms" },
    ],
    cta_label: "Ouvrir le formulaire de prédiction",
    cta_hint: "Démo instantanée, aucune installation",
    confirmation: "Le formulaire de prédiction est disponible juste en dessous ↓",
    logo: "Iris Predictor",
    nav_pills: ["Pipeline LogReg", "Streamlit + Rust"],
    visual_eyebrow: "Pipeline Iris",
    visual_title: "Régression logistique",
    visual_text: "Nous nettoyons les mesures, standardisons les données et entraînons une \
                  régression logistique fiable pour séparer les trois espèces.",
    visual_chips: ["Accuracy 97%", "F1-macro 97%", "Hold-out 93%"],
    features: [
        FeatureCopy {
            title: "Découverte guidée",
            badge: "Explorer",
            desc: "Quelques graphiques suffisent pour comprendre ce qui distingue chaque espèce.",
        },
        FeatureCopy {
            title: "Actions en un clic",
            badge: "Scripts",
            desc: "Entraînez, évaluez ou prédisez en ligne de commande, sans configuration.",
        },
        FeatureCopy {
            title: "Interface live",
            badge: "Démo",
            desc: "Saisissez les mesures et la page renvoie l'espèce d'Iris la plus probable.",
        },
    ],
    timeline_label: "Parcours complet",
    steps: [
        StepCopy {
            title: "Explorer",
            desc: "Partez du dataset Iris et faites ressortir visuellement les grandes tendances.",
        },
        StepCopy {
            title: "Valider",
            desc: "Entraînez le modèle, vérifiez les métriques et comparez sur un jeu hold-out.",
        },
        StepCopy {
            title: "Partager",
            desc: "Utilisez l'interface Streamlit pour présenter la solution comme un vrai produit.",
        },
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_locale_has_its_own_copy() {
        let en = LocaleCopy::for_locale(Locale::En);
        let fr = LocaleCopy::for_locale(Locale::Fr);

        assert_eq!(en.cta_label, "Open the prediction form");
        assert_eq!(fr.cta_label, "Ouvrir le formulaire de prédiction");
        assert_ne!(en.bullets, fr.bullets);
        assert_ne!(en.confirmation, fr.confirmation);
    }
}
