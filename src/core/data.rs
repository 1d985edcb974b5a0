// File: src/core/data.rs
//! Built-in lexicon: used whenever a dictionary file is absent from the data
//! directory. Entry order matters, reverse lookup returns the first match.

pub const ITALIAN: &[(&str, &str)] = &[
    ("padre", "pater"), ("madre", "mater"), ("fratello", "frater"), ("sorella", "soror"),
    ("luce", "lux"), ("notte", "nox"), ("stella", "stella"), ("acqua", "aqua"),
    ("terra", "terra"), ("mare", "mare"),
    ("cuore", "cor"), ("occhio", "oculus"), ("mano", "manus"),
    ("amore", "amor"), ("pane", "panis"), ("focolare", "focus"), ("fuoco", "focus"),
];

pub const SPANISH: &[(&str, &str)] = &[
    ("padre", "pater"), ("madre", "mater"), ("hermano", "frater"), ("hermana", "soror"),
    ("luz", "lux"), ("noche", "nox"), ("estrella", "stella"), ("agua", "aqua"),
    ("tierra", "terra"), ("mar", "mare"),
    ("corazon", "cor"), ("ojo", "oculus"), ("mano", "manus"),
    ("amor", "amor"), ("pan", "panis"), ("fuego", "focus"),
];

pub const GREEK: &[(&str, &str)] = &[
    ("πατήρ", "pater"), ("μήτηρ", "mater"), ("φράτηρ", "frater"),
    ("λευκός", "lux"), ("νύξ", "nox"), ("ἀστήρ", "stella"),
    ("τέρσομαι", "terra"), ("θάλασσα", "mare"),
    ("καρδία", "cor"), ("κῆρ", "cor"), ("ὄψ", "oculus"), ("χείρ", "manus"),
    ("πατέομαι", "panis"),
];

pub const OLD_ENGLISH: &[(&str, &str)] = &[
    ("fæder", "pater"), ("mōdor", "mater"), ("brōþor", "frater"), ("swustor", "soror"),
    ("léoht", "lux"), ("niht", "nox"), ("steorra", "stella"), ("wæter", "aqua"),
    ("eorþe", "terra"), ("sæ", "mare"),
    ("heorte", "cor"), ("ēage", "oculus"), ("hand", "manus"),
    ("lufu", "amor"), ("hlāf", "panis"), ("fyr", "focus"),
];

pub const MODERN_GERMAN: &[(&str, &str)] = &[
    ("vater", "pater"), ("mutter", "mater"), ("bruder", "frater"), ("schwester", "soror"),
    ("licht", "lux"), ("nacht", "nox"), ("stern", "stella"), ("wasser", "aqua"),
    ("erde", "terra"), ("meer", "mare"),
    ("herz", "cor"), ("auge", "oculus"), ("hand", "manus"),
    ("liebe", "amor"), ("brot", "panis"), ("feuer", "focus"),
];

pub const LATIN_PIE: &[(&str, &str)] = &[
    ("pater", "*ph₂tḗr"), ("mater", "*méh₂tēr"), ("frater", "*bʰréh₂tēr"), ("soror", "*swésōr"),
    ("lux", "*lewkʷ-"), ("nox", "*nókʷts"), ("stella", "*h₂stḗr"), ("aqua", "*h₂ekʷā"),
    ("terra", "*térh₂"), ("mare", "*móri-"),
    ("cor", "*ḱḗr"), ("oculus", "*h₃ekʷlos"), ("manus", "*mānus"),
    ("amor", "*h₂m̥h₁r"), ("panis", "*paHnis"), ("focus", "*péh₂ḱus"),
];

/// Root notes after Pokorny's dictionary, with Starostin's revisions.
pub const ETYMOLOGY_NOTES: &[(&str, &str)] = &[
    ("pater", "Root pǝtḗ(r), PIE *ph₂tḗr. The head and protector of the household. Latin pater is not only the biological parent but the legal and sacral authority of the house (paterfamilias). Matches Greek patḗr and English father exactly."),
    ("mater", "Root māter-, PIE *méh₂tēr. A near-universal word for mother. The dictionary also links it to māteria (matter), suggesting an archaic idea of the mother as origin, trunk or substance from which life grows."),
    ("frater", "Root bhrātēr, PIE *bʰréh₂tēr. In Latin and Germanic the blood brother; Greek phrā́tēr named a member of a phratry, a political and religious clan. The word probably first meant a male member of the same tribal group."),
    ("soror", "Root su̯esor-, PIE *swésōr. Latin soror shows rhotacism (intervocalic s becomes r: swesor > soror). It may literally mean 'the woman of one's own group', from swe- 'own'."),
    ("lux", "Root leuk- / leuĝh-, PIE *lewkʷ-. Joins the ideas of light, white and seeing. The same root gives luna (the shining one) and lumen."),
    ("nox", "Root nekʷ-(t-), nokʷ-t-s, PIE *nókʷts. One of the most stable Indo-European words, nearly identical everywhere (Latin nox, German Nacht, English night, Greek nyx). The time of darkness."),
    ("stella", "Root ster-, PIE *h₂stḗr. Latin stella is an archaic diminutive (*ster-la). The stars are pictured as things scattered or sown across the sky."),
    ("aqua", "Root akā-, akʷā-, PIE *h₂ekʷā. Running water, water as an element. Aquila may come from here, for the dark plumage or the bird's habitat."),
    ("terra", "Root ters-, PIE *térh₂ (or ters-). Latin terra first meant 'the dry one', land as opposed to sea. Shares the root of torrid and toast."),
    ("mare", "Root mori-, PIE *móri-. Common to Latin, Celtic, Germanic and Slavic for the sea."),
    ("cor", "Root k̂erd-, PIE *ḱḗr. Seat of emotion and intellect for the ancients. Germanic h (heart) regularly answers Latin c (cor) under Grimm's law."),
    ("oculus", "Root okʷ-, PIE *h₃ekʷlos. The root of sight. Ferox derives from it too: 'wild-looking', 'with a fierce gaze'."),
    ("manus", "Root man-, PIE *mānus. Latin manus meant the limb and also legal power (marital manus, manumission of slaves): the hand that grasps and controls."),
    ("amor", "Root am(m)a, PIE *h₂m̥h₁r (or the nursery word amma). Amor starts not as abstract passion but in child speech (amma = mummy), expressing attachment, care and nourishment."),
    ("panis", "Root pā-, PIE *paHnis. Bread is etymologically 'nourishment' itself, from the root of pascere (to pasture) and pastus."),
    ("focus", "Root bheg- / bhā-, PIE *péh₂ḱus (or bho-k-). Focus was not fire itself (ignis) but the domestic hearth, the centre of the house where people cooked and gathered."),
];

/// Source credit shown under every etymological note.
pub const NOTES_ATTRIBUTION: &str = "After J. Pokorny, digital edition revised by the Dnghu Association (2007), with contributions by G. Starostin and A. Lubotsky. CC BY-SA 3.0.";
