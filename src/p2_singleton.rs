// Pattern 2: Singleton Pattern - One Instance Per Process
// Demonstrates lazy, race-free initialization of a process-wide instance.

use colored::Colorize;
use std::thread;

// ============================================================================
// Example: Singleton Behind an Explicit Module-level Handle
// ============================================================================

mod service {
    use std::sync::OnceLock;

    /// Process-wide handle for the one `AppService` instance. Empty until the
    /// first `AppService::global` call fills it; holds the instance for the
    /// rest of the process lifetime.
    static INSTANCE: OnceLock<AppService> = OnceLock::new();

    pub struct AppService {
        // Private field keeps construction inside this module.
        _private: (),
    }

    impl AppService {
        /// Sole way to reach the instance. The first call constructs it;
        /// `OnceLock` resolves concurrent first calls to a single winner, so
        /// every caller gets the same reference.
        pub fn global() -> &'static AppService {
            INSTANCE.get_or_init(|| {
                println!("AppService: initializing");
                AppService { _private: () }
            })
        }

        pub fn run_business_logic(&self) {
            println!("AppService: running business logic");
        }
    }
}

use service::AppService;

fn singleton_accessor_example() {
    let first = AppService::global();
    let second = AppService::global();

    println!("Same instance: {}", std::ptr::eq(first, second));
    first.run_business_logic();
}

// ============================================================================
// Example: Concurrent First Access Still Yields One Instance
// ============================================================================

fn singleton_concurrent_example() {
    let handles: Vec<_> = (0..4)
        .map(|worker| {
            thread::spawn(move || {
                let service = AppService::global();
                println!("worker {}: instance at {:p}", worker, service);
                service as *const AppService as usize
            })
        })
        .collect();

    let addresses: Vec<usize> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect();

    let all_same = addresses.windows(2).all(|pair| pair[0] == pair[1]);
    println!("All threads saw the same instance: {}", all_same);
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("Pattern 2: Singleton Pattern");
    println!("============================\n");

    println!("{}", "=== Lazy Accessor ===".bold());
    singleton_accessor_example();
    println!();

    println!("{}", "=== Concurrent First Access ===".bold());
    singleton_concurrent_example();
}
