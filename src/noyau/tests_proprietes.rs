//! Tests de propriétés (proptest) : invariants du moteur sur des suites de touches arbitraires.
//!
//! Invariants vérifiés :
//! - chiffres seuls => affichage = concaténation, zéros de tête élidés
//! - opérateur doublé => second ignoré
//! - C => "0" quel que soit l’état précédent
//! - affichage jamais vide
//! - a op b = calculé en f64 puis formaté (hors division par zéro)

use proptest::prelude::*;

use super::moteur::MARQUEUR_ERREUR;
use super::nombre::{formater_nombre, PRECISION_DEFAUT};
use super::{Chiffre, EtatMoteur, Moteur, Operateur};

#[derive(Clone, Copy, Debug)]
enum Action {
    Chiffre(Chiffre),
    Operateur(Operateur),
    Effacer,
    Egal,
}

fn chiffre_strategy() -> impl Strategy<Value = Chiffre> {
    (0u8..=9).prop_map(|v| Chiffre::depuis_valeur(v).unwrap_or(Chiffre::TOUS[0]))
}

fn operateur_strategy() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Addition),
        Just(Operateur::Soustraction),
        Just(Operateur::Multiplication),
        Just(Operateur::Division),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        4 => chiffre_strategy().prop_map(Action::Chiffre),
        2 => operateur_strategy().prop_map(Action::Operateur),
        1 => Just(Action::Effacer),
        1 => Just(Action::Egal),
    ]
}

fn jouer(m: &mut Moteur, actions: &[Action]) {
    for a in actions {
        match *a {
            Action::Chiffre(c) => m.saisir_chiffre(c),
            Action::Operateur(op) => m.choisir_operateur(op),
            Action::Effacer => m.effacer(),
            Action::Egal => m.egal(),
        }
    }
}

/// Nombre tapé => texte attendu : zéros de tête élidés, "0" si tout est zéro.
fn attendu_sans_zeros_de_tete(chiffres: &[Chiffre]) -> String {
    let s: String = chiffres.iter().map(|c| c.as_char()).collect();
    let t = s.trim_start_matches('0');
    if t.is_empty() {
        "0".to_string()
    } else {
        t.to_string()
    }
}

proptest! {
    /// Chiffres seuls : concaténation, "0" initial remplacé (jamais préfixé).
    #[test]
    fn chiffres_concatenes(chiffres in prop::collection::vec(chiffre_strategy(), 1..20)) {
        let mut m = Moteur::default();
        for c in &chiffres {
            m.saisir_chiffre(*c);
        }
        let attendu = attendu_sans_zeros_de_tete(&chiffres);
        prop_assert_eq!(m.affichage(), attendu.as_str());
        prop_assert_eq!(m.saisie(), m.affichage());
    }

    /// Opérateur juste après un opérateur : aucun effet.
    #[test]
    fn operateur_double_ignore(
        prefixe in prop::collection::vec(action_strategy(), 0..30),
        op1 in operateur_strategy(),
        op2 in operateur_strategy(),
    ) {
        let mut m = Moteur::default();
        jouer(&mut m, &prefixe);
        m.choisir_operateur(op1);

        let avant = (
            m.affichage().to_string(),
            m.saisie().to_string(),
            m.premier_operande().to_bits(),
            m.operateur_en_attente(),
            m.attente_second_operande(),
            m.etat(),
        );
        m.choisir_operateur(op2);
        let apres = (
            m.affichage().to_string(),
            m.saisie().to_string(),
            m.premier_operande().to_bits(),
            m.operateur_en_attente(),
            m.attente_second_operande(),
            m.etat(),
        );
        prop_assert_eq!(avant, apres);
    }

    /// C : "0" depuis n’importe quel état, erreur comprise.
    #[test]
    fn effacer_toujours_zero(actions in prop::collection::vec(action_strategy(), 0..40)) {
        let mut m = Moteur::default();
        jouer(&mut m, &actions);
        m.effacer();
        prop_assert_eq!(m.affichage(), "0");
        prop_assert_eq!(m.etat(), EtatMoteur::Repos);
        prop_assert_eq!(m.operateur_en_attente(), None);
    }

    /// Affichage jamais vide, quoi qu’on tape.
    #[test]
    fn affichage_jamais_vide(actions in prop::collection::vec(action_strategy(), 0..60)) {
        let mut m = Moteur::default();
        for a in &actions {
            jouer(&mut m, std::slice::from_ref(a));
            prop_assert!(!m.affichage().is_empty(), "après {:?}", a);
        }
    }

    /// a op b = : même résultat que le calcul f64 direct, formaté à 6 chiffres.
    #[test]
    fn operation_binaire(
        a in prop::collection::vec(chiffre_strategy(), 1..7),
        op in operateur_strategy(),
        b in prop::collection::vec(chiffre_strategy(), 1..7),
    ) {
        let mut m = Moteur::default();
        jouer(&mut m, &a.iter().copied().map(Action::Chiffre).collect::<Vec<_>>());
        m.choisir_operateur(op);
        jouer(&mut m, &b.iter().copied().map(Action::Chiffre).collect::<Vec<_>>());
        m.egal();

        let x: f64 = attendu_sans_zeros_de_tete(&a).parse().unwrap_or(0.0);
        let y: f64 = attendu_sans_zeros_de_tete(&b).parse().unwrap_or(0.0);

        if op == Operateur::Division && y == 0.0 {
            prop_assert_eq!(m.affichage(), MARQUEUR_ERREUR);
            prop_assert_eq!(m.etat(), EtatMoteur::Erreur);
            prop_assert_eq!(m.operateur_en_attente(), Some(Operateur::Division));
        } else {
            let r = match op {
                Operateur::Addition => x + y,
                Operateur::Soustraction => x - y,
                Operateur::Multiplication => x * y,
                Operateur::Division => x / y,
            };
            let attendu = formater_nombre(r, PRECISION_DEFAUT);
            prop_assert_eq!(m.affichage(), attendu.as_str());
            prop_assert_eq!(m.operateur_en_attente(), None);
            prop_assert!(m.attente_second_operande());
        }
    }
}
