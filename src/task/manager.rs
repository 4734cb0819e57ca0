use crate::task::queue::OrderedQueue;
use crate::task::types::*;
use std::io::{self, Write};
use tracing::{debug, info, warn};

/// Central task management system.
///
/// Holds one FIFO queue per priority tier. Everything lives in memory and is
/// dropped with the manager.
#[derive(Debug, Default, Clone)]
pub struct TaskManager {
    high: OrderedQueue<Task>,
    medium: OrderedQueue<Task>,
    low: OrderedQueue<Task>,
}

impl TaskManager {
    /// Create a task manager with three empty tiers
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to a single tier. `Priority::None` has no tier.
    pub fn tier(&self, priority: Priority) -> Option<&OrderedQueue<Task>> {
        match priority {
            Priority::High => Some(&self.high),
            Priority::Medium => Some(&self.medium),
            Priority::Low => Some(&self.low),
            Priority::None => None,
        }
    }

    fn tier_mut(&mut self, priority: Priority) -> Option<&mut OrderedQueue<Task>> {
        match priority {
            Priority::High => Some(&mut self.high),
            Priority::Medium => Some(&mut self.medium),
            Priority::Low => Some(&mut self.low),
            Priority::None => None,
        }
    }

    /// Total number of pending tasks across all tiers
    pub fn len(&self) -> usize {
        self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Queue a new task at the tail of its tier
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<(), TaskError> {
        let description = description.into();
        let Some(queue) = self.tier_mut(priority) else {
            warn!("Rejected task '{}' with invalid priority", description);
            return Err(TaskError::InvalidPriority {
                description,
                priority,
            });
        };

        debug!("Adding task '{}' with priority {}", description, priority);
        queue.enqueue(Task::new(description, priority));
        Ok(())
    }

    /// Remove every task whose description matches exactly, in every tier.
    ///
    /// Survivors keep their relative order. Returns how many tasks were
    /// removed; zero is not an error.
    pub fn remove_task(&mut self, description: &str) -> usize {
        let removed: usize = [&mut self.high, &mut self.medium, &mut self.low]
            .into_iter()
            .map(|queue| queue.retain(|task| !task.matches(description)))
            .sum();

        debug!("Removed {} task(s) matching '{}'", removed, description);
        removed
    }

    /// Pop the head of the highest non-empty tier
    fn pop_next(&mut self) -> Option<Task> {
        [&mut self.high, &mut self.medium, &mut self.low]
            .into_iter()
            .find(|queue| !queue.is_empty())?
            .dequeue()
            .ok()
    }

    fn announce_limit(count: i64) -> usize {
        usize::try_from(count.max(0)).unwrap_or(usize::MAX)
    }

    fn log_announced(count: i64, announced: usize) {
        if announced < Self::announce_limit(count) {
            debug!(
                "Requested {} task(s), only {} were pending",
                count, announced
            );
        }
        info!("Announced {} task(s)", announced);
    }

    /// Pop up to `count` tasks in strict tier order.
    ///
    /// Stops early once every tier is drained. A count of zero or less pops
    /// nothing.
    pub fn announce(&mut self, count: i64) -> Vec<Task> {
        let announced: Vec<Task> = std::iter::from_fn(|| self.pop_next())
            .take(Self::announce_limit(count))
            .collect();

        Self::log_announced(count, announced.len());
        announced
    }

    /// Pop up to `count` tasks, writing one `Task: ...` line as each is popped.
    ///
    /// A write error stops the run; only the task being written is lost.
    pub fn announce_tasks<W: Write>(&mut self, count: i64, out: &mut W) -> io::Result<usize> {
        let limit = Self::announce_limit(count);
        let mut announced = 0;

        while announced < limit {
            let Some(task) = self.pop_next() else {
                break;
            };
            if let Err(e) = writeln!(out, "Task: {}", task) {
                warn!("Lost task '{}' while announcing: {}", task.description(), e);
                return Err(e);
            }
            announced += 1;
        }

        Self::log_announced(count, announced);
        Ok(announced)
    }

    /// Write every pending task grouped by tier. Does not modify any queue.
    pub fn list_tasks<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for priority in Priority::TIERS {
            let (Some(header), Some(queue)) = (priority.header(), self.tier(priority)) else {
                continue;
            };
            writeln!(out, "{}", header)?;
            for task in queue.iter() {
                writeln!(out, "- {}", task)?;
            }
        }
        Ok(())
    }
}
