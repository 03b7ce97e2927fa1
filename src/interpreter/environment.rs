use std::collections::HashMap;

/// A stack of lexical scope frames mapping names to values of type `T`.
///
/// The type checker instantiates it with declared types, the evaluator with
/// runtime values. A frame is pushed on entry to every block, branch, and
/// loop iteration and popped on exit, so bindings made inside a construct
/// never leak out of it.
#[derive(Debug)]
pub struct Environment<T> {
    frames: Vec<HashMap<String, T>>,
}

impl<T> Environment<T> {
    /// Creates an environment with a single, empty global frame.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: vec![HashMap::new()] }
    }

    /// Pushes a fresh innermost frame.
    pub fn push_frame(&mut self) {
        self.frames.push(HashMap::new());
    }

    /// Pops the innermost frame, discarding its bindings.
    ///
    /// The outermost frame is never popped; pushes and pops are paired by
    /// the callers.
    pub fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Declares `name` in the innermost frame, shadowing any outer binding.
    pub fn declare(&mut self, name: String, value: T) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name, value);
        }
    }

    /// Looks `name` up from the innermost frame outwards.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.frames.iter().rev().find_map(|frame| frame.get(name))
    }

    /// Reassigns the nearest visible binding of `name`.
    ///
    /// # Returns
    /// `true` when a binding was found and updated, `false` when `name` is
    /// not declared in any frame.
    pub fn assign(&mut self, name: &str, value: T) -> bool {
        for frame in self.frames.iter_mut().rev() {
            if let Some(slot) = frame.get_mut(name) {
                *slot = value;
                return true;
            }
        }
        false
    }

    /// Whether `name` is visible in any frame.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Whether `name` is declared in the innermost frame itself.
    #[must_use]
    pub fn declared_in_current(&self, name: &str) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.contains_key(name))
    }
}

impl<T> Default for Environment<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[test]
    fn inner_frames_shadow_and_unwind() {
        let mut env = Environment::new();
        env.declare("x".to_string(), 1);

        env.push_frame();
        env.declare("x".to_string(), 2);
        assert_eq!(env.get("x"), Some(&2));

        env.pop_frame();
        assert_eq!(env.get("x"), Some(&1));
    }

    #[test]
    fn assign_updates_nearest_binding() {
        let mut env = Environment::new();
        env.declare("x".to_string(), 1);
        env.push_frame();

        assert!(env.assign("x", 5));
        env.pop_frame();
        assert_eq!(env.get("x"), Some(&5));

        assert!(!env.assign("y", 0));
    }
}
