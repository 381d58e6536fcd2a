// Pattern 1: Observer Pattern - Subject, Concrete Observers, Notification
// Demonstrates one-to-many state-change notification with trait objects.

use colored::Colorize;
use rand::Rng;
use std::rc::Rc;

// ============================================================================
// Example: Subject with an Ordered, Duplicate-free Observer List
// ============================================================================

trait Observer {
    fn update(&self, state: u8);
}

struct Subject {
    /// Current state, always in 0..=10.
    state: u8,
    /// Registered observers, kept in attachment order.
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    fn new() -> Self {
        Self {
            state: 0,
            observers: Vec::new(),
        }
    }

    fn attach(&mut self, observer: Rc<dyn Observer>) {
        let already_attached = self
            .observers
            .iter()
            .any(|existing| Rc::ptr_eq(existing, &observer));
        if already_attached {
            println!("{}", "Subject: observer already attached".yellow());
            return;
        }
        println!("Subject: attached an observer");
        self.observers.push(observer);
    }

    fn detach(&mut self, observer: &Rc<dyn Observer>) {
        match self
            .observers
            .iter()
            .position(|existing| Rc::ptr_eq(existing, observer))
        {
            Some(index) => {
                self.observers.remove(index);
                println!("Subject: detached an observer");
            }
            None => println!("{}", "Subject: no such observer".yellow()),
        }
    }

    fn notify(&self) {
        println!("Subject: notifying {} observer(s)", self.observers.len());
        for observer in &self.observers {
            observer.update(self.state);
        }
    }

    /// Overwrites the state without notifying, for deterministic walkthroughs.
    fn set_state(&mut self, state: u8) {
        self.state = state;
    }

    fn run_business_logic(&mut self, rng: &mut impl Rng) {
        println!("\nSubject: doing something important");
        self.state = rng.gen_range(0..=10);
        println!("Subject: state changed to {}", self.state);
        self.notify();
    }

    fn observer_count(&self) -> usize {
        self.observers.len()
    }
}

// ============================================================================
// Example: Concrete Observers with Different Trigger Conditions
// ============================================================================

struct ObserverA;

impl ObserverA {
    fn triggers(state: u8) -> bool {
        state < 3
    }
}

impl Observer for ObserverA {
    fn update(&self, state: u8) {
        if Self::triggers(state) {
            println!("{}", "ObserverA: reacted to the event".green());
        }
    }
}

struct ObserverB;

impl ObserverB {
    fn triggers(state: u8) -> bool {
        state == 0 || state >= 2
    }
}

impl Observer for ObserverB {
    fn update(&self, state: u8) {
        if Self::triggers(state) {
            println!("{}", "ObserverB: reacted to the event".green());
        }
    }
}

// ============================================================================
// Example: Basic Subscribe / Notify Flow
// ============================================================================

fn observer_basic_example() {
    let mut subject = Subject::new();
    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    let observer_b: Rc<dyn Observer> = Rc::new(ObserverB);

    subject.attach(Rc::clone(&observer_a));
    subject.attach(Rc::clone(&observer_b));

    let mut rng = rand::thread_rng();
    subject.run_business_logic(&mut rng);
    subject.run_business_logic(&mut rng);

    println!();
    subject.detach(&observer_b);
    subject.run_business_logic(&mut rng);
}

// ============================================================================
// Example: Duplicate Attach and Absent Detach Degrade to Notices
// ============================================================================

fn observer_registration_example() {
    let mut subject = Subject::new();
    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    let observer_b: Rc<dyn Observer> = Rc::new(ObserverB);

    subject.attach(Rc::clone(&observer_a));
    subject.attach(Rc::clone(&observer_a));
    println!("Registered observers: {}", subject.observer_count());

    subject.detach(&observer_b);
    println!("Registered observers: {}", subject.observer_count());
}

// ============================================================================
// Example: Forced States Walk the Trigger Conditions
// ============================================================================

fn observer_forced_state_example() {
    let mut subject = Subject::new();
    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    let observer_b: Rc<dyn Observer> = Rc::new(ObserverB);

    subject.attach(observer_a);
    subject.attach(observer_b);

    // 0 triggers both, 1 only A, 2 both, 5 only B
    for state in [0, 1, 2, 5] {
        println!("\nForcing state to {}", state);
        subject.set_state(state);
        subject.notify();
    }
}

// ============================================================================
// Example: Injectable Randomness Makes Runs Reproducible
// ============================================================================

fn observer_seeded_example() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut subject = Subject::new();
    let observer_a: Rc<dyn Observer> = Rc::new(ObserverA);
    subject.attach(observer_a);

    // Same seed, same state sequence on every run
    let mut rng = StdRng::seed_from_u64(7);
    subject.run_business_logic(&mut rng);
    subject.run_business_logic(&mut rng);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 1: Observer Pattern");
    println!("===========================\n");

    println!("{}", "=== Basic Subscribe / Notify Flow ===".bold());
    observer_basic_example();
    println!();

    println!("{}", "=== Duplicate Attach / Absent Detach ===".bold());
    observer_registration_example();
    println!();

    println!("{}", "=== Forced States ===".bold());
    observer_forced_state_example();
    println!();

    println!("{}", "=== Seeded Randomness ===".bold());
    observer_seeded_example();
}
