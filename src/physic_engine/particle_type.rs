/// Origine d'une particule : traînée de fusée, éclat d'explosion ou onde de choc.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParticleType {
    /// Traînée (particules laissées derrière la fusée)
    Trail = 0,
    /// Éclat coloré d'une explosion
    #[default]
    Burst = 1,
    /// Flash neutre au centre de l'explosion
    Shockwave = 2,
}

impl ParticleType {
    /// Drapeau `fade` porté par les particules de ce type.
    pub fn fades(&self) -> bool {
        matches!(self, ParticleType::Trail | ParticleType::Shockwave)
    }

    /// Retourne une description lisible du type de particule
    pub fn description(&self) -> &'static str {
        match self {
            ParticleType::Trail => "Trail particle",
            ParticleType::Burst => "Burst particle",
            ParticleType::Shockwave => "Shockwave particle",
        }
    }
}
