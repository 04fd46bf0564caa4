//! Health advice per band and locale

use super::Locale;
use crate::metric::Band;

type TipSet = [&'static str; 6];

fn band_tips(band: Band, locale: Locale) -> &'static TipSet {
    match (band, locale) {
        (Band::Low, Locale::En) => &[
            "• Eat more calories than you burn",
            "• Include protein-rich foods (meat, fish, eggs, beans)",
            "• Add healthy fats (nuts, avocados, olive oil)",
            "• Eat frequent meals throughout the day",
            "• Include strength training exercises",
            "• Consider nutritional supplements if needed",
        ],
        (Band::Low, Locale::Fr) => &[
            "• Mangez plus de calories que vous n'en brûlez",
            "• Incluez des aliments riches en protéines (viande, poisson, œufs, haricots)",
            "• Ajoutez des graisses saines (noix, avocats, huile d'olive)",
            "• Mangez des repas fréquents tout au long de la journée",
            "• Incluez des exercices de musculation",
            "• Considérez des suppléments nutritionnels si nécessaire",
        ],
        (Band::Low, Locale::Rw) => &[
            "• Rya kalori nyinshi kurusha uko ukoresha",
            "• Ongera ibiryo byuzuye protini (inyama, ifi, amagi, ibishyimbo)",
            "• Ongera amavuta meza (ubunyobwa, avoka, amavuta y'umutemeri)",
            "• Rya amafunguro ya buri munsi",
            "• Ongera imikino yo gufasha ububasha",
            "• Tekereza vitamini niba akenewe",
        ],
        (Band::Normal, Locale::En) => &[
            "• Maintain your current healthy weight",
            "• Eat a balanced diet with fruits and vegetables",
            "• Exercise regularly (150 minutes/week)",
            "• Stay hydrated by drinking water",
            "• Get adequate sleep (7-9 hours)",
            "• Avoid processed foods and excess sugar",
        ],
        (Band::Normal, Locale::Fr) => &[
            "• Maintenez votre poids santé actuel",
            "• Mangez une alimentation équilibrée avec fruits et légumes",
            "• Faites de l'exercice régulièrement (150 minutes/semaine)",
            "• Restez hydraté en buvant de l'eau",
            "• Dormez suffisamment (7-9 heures)",
            "• Évitez les aliments transformés et l'excès de sucre",
        ],
        (Band::Normal, Locale::Rw) => &[
            "• Komeza ibiro byawe by'ubu ufite ubuzima",
            "• Rya amafunguro yuzuye amashyamba n'imboga",
            "• Kora imikino ya buri munsi (iminota 150 ku wa cumi)",
            "• Nywa amazi ya buri munsi",
            "• Rara amasaha 7-9",
            "• Reka ibiryo byoherejwe n'isukari nyinshi",
        ],
        (Band::High, Locale::En) => &[
            "• Reduce calorie intake gradually",
            "• Increase physical activity (30 minutes/day)",
            "• Eat more vegetables and lean proteins",
            "• Limit processed foods and sugary drinks",
            "• Practice portion control",
            "• Consider working with a nutritionist",
        ],
        (Band::High, Locale::Fr) => &[
            "• Réduisez progressivement l'apport calorique",
            "• Augmentez l'activité physique (30 minutes/jour)",
            "• Mangez plus de légumes et de protéines maigres",
            "• Limitez les aliments transformés et les boissons sucrées",
            "• Pratiquez le contrôle des portions",
            "• Considérez travailler avec un nutritionniste",
        ],
        (Band::High, Locale::Rw) => &[
            "• Kugabanya kalori buhoro buhoro",
            "• Ongera imikino (iminota 30 ku munsi)",
            "• Rya imboga nyinshi n'ibiryo byuzuye protini",
            "• Reka ibiryo byoherejwe n'ibinyobwa byuzuye isukari",
            "• Kugenzura umubare w'ibiryo",
            "• Tekereza gukorana n'umwarimu w'ibiryo",
        ],
        (Band::VeryHigh, Locale::En) => &[
            "• Consult a healthcare provider for guidance",
            "• Start with low-impact exercises (walking, swimming)",
            "• Focus on portion control and meal planning",
            "• Keep a food diary to track intake",
            "• Join a support group or weight loss program",
            "• Consider medical weight loss options",
        ],
        (Band::VeryHigh, Locale::Fr) => &[
            "• Consultez un professionnel de la santé pour des conseils",
            "• Commencez par des exercices à faible impact (marche, natation)",
            "• Concentrez-vous sur le contrôle des portions et la planification des repas",
            "• Tenez un journal alimentaire pour suivre l'apport",
            "• Rejoignez un groupe de soutien ou un programme de perte de poids",
            "• Considérez les options médicales de perte de poids",
        ],
        (Band::VeryHigh, Locale::Rw) => &[
            "• Vugana n'umwarimu w'ubuzima kugira ngo akugenzure",
            "• Tangira imikino itagira ingaruka (kugenda, koga)",
            "• Tekereza kugenzura umubare w'ibiryo n'uburyo bwo kurya",
            "• Andika ibiryo uko ubirya",
            "• Jya mu itsinda ry'ubufasha cyangwa gahunda yo kugabanya ibiro",
            "• Tekereza uburyo bwo kugabanya ibiro",
        ],
    }
}

fn general_tips(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::En => &[
            "• Eat a balanced diet",
            "• Exercise regularly",
            "• Stay hydrated",
            "• Get adequate sleep",
            "• Consult a healthcare provider",
        ],
        Locale::Fr => &[
            "• Mangez une alimentation équilibrée",
            "• Faites de l'exercice régulièrement",
            "• Restez hydraté",
            "• Dormez suffisamment",
            "• Consultez un professionnel de la santé",
        ],
        Locale::Rw => &[
            "• Rya amafunguro yuzuye",
            "• Kora imikino ya buri munsi",
            "• Nywa amazi",
            "• Rara amasaha akenewe",
            "• Vugana n'umwarimu w'ubuzima",
        ],
    }
}

/// Newline-joined tips for `band`; general advice when no band is known.
pub fn tips(band: Option<Band>, locale: Locale) -> String {
    match band {
        Some(band) => band_tips(band, locale).join("\n"),
        None => general_tips(locale).join("\n"),
    }
}

/// One-line exercise recommendation for `band`
pub fn exercise_advice(band: Band, locale: Locale) -> &'static str {
    match (band, locale) {
        (Band::Low, Locale::En) => "Focus on strength training and muscle building exercises",
        (Band::Low, Locale::Fr) => {
            "Concentrez-vous sur la musculation et les exercices de développement musculaire"
        }
        (Band::Low, Locale::Rw) => "Tekereza imikino yo gufasha ububasha n'ubwoko",
        (Band::Normal, Locale::En) => "Mix of cardio and strength training for maintenance",
        (Band::Normal, Locale::Fr) => "Mélange de cardio et de musculation pour l'entretien",
        (Band::Normal, Locale::Rw) => "Guhuza imikino yo gufasha umutima n'ububasha",
        (Band::High, Locale::En) => "Start with walking, swimming, or cycling",
        (Band::High, Locale::Fr) => "Commencez par la marche, la natation ou le vélo",
        (Band::High, Locale::Rw) => "Tangira kugenda, koga, cyangwa gutwara igare",
        (Band::VeryHigh, Locale::En) => "Begin with low-impact activities like walking",
        (Band::VeryHigh, Locale::Fr) => {
            "Commencez par des activités à faible impact comme la marche"
        }
        (Band::VeryHigh, Locale::Rw) => "Tangira imikino itagira ingaruka nka kugenda",
    }
}

/// One-line nutrition recommendation for `band`
pub fn nutrition_advice(band: Band, locale: Locale) -> &'static str {
    match (band, locale) {
        (Band::Low, Locale::En) => "Increase protein and healthy fat intake",
        (Band::Low, Locale::Fr) => "Augmentez l'apport en protéines et en graisses saines",
        (Band::Low, Locale::Rw) => "Ongera ibiryo byuzuye protini n'amavuta meza",
        (Band::Normal, Locale::En) => "Maintain balanced nutrition with variety",
        (Band::Normal, Locale::Fr) => "Maintenez une nutrition équilibrée avec de la variété",
        (Band::Normal, Locale::Rw) => "Komeza amafunguro yuzuye n'ubwoko bwinshi",
        (Band::High, Locale::En) => "Reduce portion sizes and increase vegetables",
        (Band::High, Locale::Fr) => "Réduisez la taille des portions et augmentez les légumes",
        (Band::High, Locale::Rw) => "Kugabanya umubare w'ibiryo n'ongera imboga",
        (Band::VeryHigh, Locale::En) => "Focus on whole foods and portion control",
        (Band::VeryHigh, Locale::Fr) => {
            "Concentrez-vous sur les aliments entiers et le contrôle des portions"
        }
        (Band::VeryHigh, Locale::Rw) => "Tekereza ibiryo byuzuye n'uburyo bwo kugenzura",
    }
}
