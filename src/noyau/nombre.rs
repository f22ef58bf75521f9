// src/noyau/nombre.rs
//
// Texte <-> nombre pour l’affichage de la calculatrice.
//
// - lecture PERMISSIVE : tout texte illisible vaut 0 (jamais d’erreur)
// - écriture façon printf("%g") : précision 6 par défaut, zéros de queue retirés,
//   notation scientifique si exposant < -4 ou >= précision ("1e+07", "1.5e-05")

/// Précision d’affichage par défaut (chiffres significatifs).
pub const PRECISION_DEFAUT: usize = 6;

/// Garde-fou : au-delà de 17 chiffres significatifs, un f64 n’a plus rien à dire.
pub const PRECISION_MAX: usize = 17;

/// Lit un nombre ; texte invalide => 0.0.
///
/// Espaces de tête/queue ignorés. Accepte aussi la forme scientifique
/// produite par `formater_nombre` ("1e+07"), ainsi que "inf"/"nan".
pub fn lire_nombre(texte: &str) -> f64 {
    texte.trim().parse::<f64>().unwrap_or(0.0)
}

/// Formate `x` avec `precision` chiffres significatifs (bornée à 1..=17).
pub fn formater_nombre(x: f64, precision: usize) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }
    if x == 0.0 {
        return if x.is_sign_negative() {
            "-0".to_string()
        } else {
            "0".to_string()
        };
    }

    let p = precision.clamp(1, PRECISION_MAX);

    // L’arrondi à p chiffres peut changer l’exposant (9.999999 -> 1e+01) :
    // on le lit donc APRÈS arrondi, sur la forme scientifique.
    let sci = format!("{:.*e}", p - 1, x);
    let (mantisse, exposant) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exposant < -4 || exposant >= p as i32 {
        let m = retirer_zeros(mantisse);
        let signe = if exposant < 0 { '-' } else { '+' };
        return format!("{m}e{signe}{:02}", exposant.unsigned_abs());
    }

    let decimales = (p as i32 - 1 - exposant).max(0) as usize;
    let fixe = format!("{x:.decimales$}");
    retirer_zeros(&fixe).to_string()
}

/// "2.500" -> "2.5" ; "3.000" -> "3" ; "120" -> "120" (pas de point => intact).
fn retirer_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}
