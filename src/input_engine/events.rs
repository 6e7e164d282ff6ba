use crossbeam_channel::{unbounded, Receiver, Sender};

/// Événements produits par l'hôte (page, fenêtre, scripts) à destination du simulateur.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Clic sur le bouton de lancement : grand show
    LaunchButton,
    /// Grand show scripté ; `None` prend le nombre de fusées par défaut
    GrandShow(Option<usize>),
    /// Clic quelque part sur la surface. `on_button` indique que le clic
    /// provient du bouton, déjà traité par `LaunchButton`.
    PointerClick { x: f32, y: f32, on_button: bool },
    /// Fin de chargement : petit show différé
    PageLoaded,
    /// Nouvelle taille logique et nouveau device pixel ratio
    Resize {
        width: f32,
        height: f32,
        device_pixel_ratio: f32,
    },
    /// Préférence « réduire les animations » de l'utilisateur
    ReducedMotion(bool),
}

pub type InputSender = Sender<InputEvent>;
pub type InputReceiver = Receiver<InputEvent>;

/// File d'entrée non bornée : l'émetteur est cloné vers les gestionnaires
/// d'événements, le récepteur reste dans la boucle de rendu.
pub fn input_channel() -> (InputSender, InputReceiver) {
    unbounded()
}
