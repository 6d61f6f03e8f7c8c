use crate::{
    animation::tween::{Property, PropertyStore, Target, Tween, Value, sample_values},
    foundation::error::AuroraResult,
};

/// Cancellable reference to a tween scheduled on a [`Timeline`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TweenHandle(u64);

struct ActiveTween {
    handle: TweenHandle,
    tween: Tween,
    elapsed: f64,
    // from + keys per track, resolved when the delay has elapsed
    resolved: Option<Vec<Vec<Value>>>,
}

impl ActiveTween {
    /// Removes tracks whose property is `doomed`; returns whether any went.
    fn drop_tracks(&mut self, doomed: impl Fn(Property) -> bool) -> bool {
        let before = self.tween.tracks.len();
        let tracks = std::mem::take(&mut self.tween.tracks);
        match self.resolved.take() {
            Some(resolved) => {
                let (tracks, resolved) = tracks
                    .into_iter()
                    .zip(resolved)
                    .filter(|(t, _)| !doomed(t.property))
                    .unzip();
                self.tween.tracks = tracks;
                self.resolved = Some(resolved);
            }
            None => {
                self.tween.tracks = tracks
                    .into_iter()
                    .filter(|t| !doomed(t.property))
                    .collect();
            }
        }
        self.tween.tracks.len() != before
    }
}

/// Owns running tweens and applies them to a [`PropertyStore`] as time advances.
#[derive(Default)]
pub struct Timeline {
    active: Vec<ActiveTween>,
    next_id: u64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `tween`. Tracks of running tweens on the same target that
    /// animate any of the same properties are dropped; a tween left with no
    /// tracks is killed.
    pub fn add(&mut self, tween: Tween) -> AuroraResult<TweenHandle> {
        tween.validate()?;
        for a in &mut self.active {
            if a.tween.target == tween.target {
                a.drop_tracks(|p| tween.animates(p));
            }
        }
        self.active.retain(|a| !a.tween.tracks.is_empty());

        let handle = TweenHandle(self.next_id);
        self.next_id += 1;
        self.active.push(ActiveTween {
            handle,
            tween,
            elapsed: 0.0,
            resolved: None,
        });
        Ok(handle)
    }

    pub fn cancel(&mut self, handle: TweenHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|a| a.handle != handle);
        self.active.len() != before
    }

    /// Stops animating `property` on `target`. Returns the number of tweens
    /// that lost a track; those with nothing left are removed.
    pub fn kill(&mut self, target: Target, property: Property) -> usize {
        let mut hit = 0;
        for a in &mut self.active {
            if a.tween.target == target && a.drop_tracks(|p| p == property) {
                hit += 1;
            }
        }
        self.active.retain(|a| !a.tween.tracks.is_empty());
        hit
    }

    pub fn is_active(&self, handle: TweenHandle) -> bool {
        self.active.iter().any(|a| a.handle == handle)
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Advances every tween by `dt` seconds and writes sampled values.
    /// Finished tweens, and tweens whose target disappeared, are dropped.
    pub fn advance<S: PropertyStore + ?Sized>(&mut self, dt: f64, store: &mut S) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.active.retain_mut(|a| {
            a.elapsed += dt;
            let local = a.elapsed - a.tween.delay;
            if local < 0.0 {
                return true;
            }

            if a.resolved.is_none() {
                let mut resolved = Vec::with_capacity(a.tween.tracks.len());
                for track in &a.tween.tracks {
                    let from = match track.from {
                        Some(v) => v,
                        None => match store.read(a.tween.target, track.property) {
                            Some(v) => v,
                            None => {
                                tracing::debug!(target_ref = ?a.tween.target, property = ?track.property, "tween target missing at start, dropping");
                                return false;
                            }
                        },
                    };
                    let mut values = Vec::with_capacity(track.keys.len() + 1);
                    values.push(from);
                    values.extend(track.keys.iter().copied());
                    resolved.push(values);
                }
                a.resolved = Some(resolved);
            }

            let (p, done) = a.tween.progress_at(local);
            let Some(resolved) = a.resolved.as_ref() else {
                return false;
            };
            for (track, values) in a.tween.tracks.iter().zip(resolved) {
                let Some(v) = sample_values(values, p) else {
                    continue;
                };
                if !store.write(a.tween.target, track.property, v) {
                    return false;
                }
            }
            !done
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
