use log::info;
use std::collections::{HashMap, VecDeque};
use std::time::Instant;

/// Profiler mono-thread de la boucle de rendu.
///
/// Garde une fenêtre glissante de `max_samples` valeurs par libellé :
/// durées de blocs (ms), compteurs (nombre d'entités vivantes...) et durée
/// totale des frames.
#[derive(Debug, Clone)]
pub struct Profiler {
    max_samples: usize,
    timings: HashMap<String, VecDeque<f32>>,
    counters: HashMap<String, VecDeque<usize>>,
    frame_times: VecDeque<f32>,
}

fn push_bounded<T>(buffer: &mut VecDeque<T>, value: T, max: usize) {
    if buffer.len() >= max.max(1) {
        buffer.pop_front();
    }
    buffer.push_back(value);
}

impl Profiler {
    pub fn new(max_samples: usize) -> Self {
        Self {
            max_samples,
            timings: HashMap::new(),
            counters: HashMap::new(),
            frame_times: VecDeque::with_capacity(max_samples),
        }
    }

    /// Profile un bloc de code et retourne sa valeur de retour
    pub fn profile_block<T, F>(&mut self, label: &str, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let result = f();
        let dt = start.elapsed().as_secs_f32() * 1000.0;
        let max = self.max_samples;
        push_bounded(self.timings.entry(label.to_owned()).or_default(), dt, max);
        result
    }

    /// Enregistre une métrique entière
    pub fn record_metric(&mut self, label: &str, value: usize) {
        let max = self.max_samples;
        push_bounded(self.counters.entry(label.to_owned()).or_default(), value, max);
    }

    /// Enregistre la durée totale d'une frame (ms)
    pub fn record_frame_time(&mut self, ms: f32) {
        let max = self.max_samples;
        push_bounded(&mut self.frame_times, ms, max);
    }

    /// Retourne le FPS moyen
    pub fn fps(&self) -> f32 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        let avg = self.frame_times.iter().sum::<f32>() / self.frame_times.len() as f32;
        if avg > 0.0 {
            1000.0 / avg
        } else {
            0.0
        }
    }

    /// Résumé des temps mesurés (moyenne, min, max), triés par libellé
    pub fn summary(&self) -> Vec<(String, f32, f32, f32)> {
        let mut out: Vec<_> = self
            .timings
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(k, v)| {
                let avg = v.iter().sum::<f32>() / v.len() as f32;
                let min = v.iter().copied().fold(f32::MAX, f32::min);
                let max = v.iter().copied().fold(f32::MIN, f32::max);
                (k.clone(), avg, min, max)
            })
            .collect();
        out.sort_by(|a, b| a.0.cmp(&b.0));
        out
    }

    /// Résumé d'un compteur : (moyenne, min, max)
    pub fn metric_summary(&self, label: &str) -> Option<(f32, usize, usize)> {
        let v = self.counters.get(label).filter(|v| !v.is_empty())?;
        let avg = v.iter().sum::<usize>() as f32 / v.len() as f32;
        let min = v.iter().copied().min()?;
        let max = v.iter().copied().max()?;
        Some((avg, min, max))
    }

    /// Log toutes les métriques vers l'info log avec un target spécifique
    pub fn log_metrics_for_target(&self, target: &str, show_fps: bool) {
        if show_fps {
            info!(target: target, "{:.2} FPS", self.fps());
        }
        for (label, avg, min, max) in self.summary() {
            info!(
                target: target,
                "{}: avg = {:.3} ms | min = {:.3} ms | max = {:.3} ms",
                label, avg, min, max
            );
        }
        let mut labels: Vec<&String> = self.counters.keys().collect();
        labels.sort();
        for label in labels {
            if let Some((avg, min, max)) = self.metric_summary(label) {
                info!(target: target, "{label}: avg={avg:.1}, min={min}, max={max}");
            }
        }
    }
}

/// Macro helper : déduit automatiquement le target via le module appelant
#[macro_export]
macro_rules! log_metrics {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), false);
    };
}

#[macro_export]
macro_rules! log_metrics_and_fps {
    ($profiler:expr) => {
        $profiler.log_metrics_for_target(module_path!(), true);
    };
}
