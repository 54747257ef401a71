//! Category grouping and capacity indicator

use serde::Serialize;

use crate::task::{Category, Task, MAX_TASKS};

/// Tasks of one category, in collection order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub emoji: &'static str,
    pub tasks: Vec<Task>,
}

impl CategoryGroup {
    /// Whether the widget shows the per-group "no tasks" placeholder
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Current count against the capacity limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CapacityIndicator {
    pub count: usize,
    pub max: usize,
}

impl CapacityIndicator {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max: MAX_TASKS,
        }
    }

    /// "count/max", as shown next to the progress bar
    pub fn label(&self) -> String {
        format!("{}/{}", self.count, self.max)
    }

    /// Progress bar fill, 0 to 100
    pub fn percent(&self) -> u8 {
        if self.max == 0 {
            return 100;
        }
        (self.count.min(self.max) * 100 / self.max) as u8
    }

    pub fn is_full(&self) -> bool {
        self.count >= self.max
    }
}

/// Everything the widget needs to draw the task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListView {
    pub capacity: CapacityIndicator,
    pub groups: Vec<CategoryGroup>,
    /// Drives the whole-list placeholder, shown instead of the groups
    pub is_empty: bool,
}

/// Group `tasks` by category.
///
/// Produces one group per entry of `categories`, in that order, including
/// groups with no tasks. Tasks keep their relative order.
pub fn group_by_category(tasks: &[Task], categories: &[Category]) -> Vec<CategoryGroup> {
    categories
        .iter()
        .map(|&category| CategoryGroup {
            category,
            label: category.label(),
            emoji: category.emoji(),
            tasks: tasks
                .iter()
                .filter(|task| task.category == category)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: u64, category: Category) -> Task {
        Task::new(id, format!("Task {}", id)).with_category(category)
    }

    #[test]
    fn test_groups_preserve_order() {
        let tasks = vec![
            task(1, Category::Work),
            task(2, Category::Leisure),
            task(3, Category::Work),
            task(4, Category::Personal),
        ];

        let groups = group_by_category(&tasks, &Category::ALL);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].category, Category::Work);
        assert_eq!(
            groups[0].tasks.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[1].tasks[0].id, 4);
        assert_eq!(groups[2].tasks[0].id, 2);
    }

    #[test]
    fn test_empty_categories_still_appear() {
        let tasks = vec![task(1, Category::Personal)];

        let groups = group_by_category(&tasks, &Category::ALL);

        assert_eq!(groups.len(), 3);
        assert!(groups[0].is_empty());
        assert!(!groups[1].is_empty());
        assert!(groups[2].is_empty());
        assert_eq!(groups[1].label, "Personal");
    }

    #[test]
    fn test_empty_collection() {
        let groups = group_by_category(&[], &Category::ALL);
        assert!(groups.iter().all(CategoryGroup::is_empty));
    }

    #[test]
    fn test_single_category_list() {
        let tasks = vec![task(1, Category::Work), task(2, Category::Work)];

        let groups = group_by_category(&tasks, &[Category::Work]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].tasks.len(), 2);
    }

    #[test]
    fn test_capacity_indicator() {
        let empty = CapacityIndicator::new(0);
        assert_eq!(empty.label(), "0/10");
        assert_eq!(empty.percent(), 0);
        assert!(!empty.is_full());

        let partial = CapacityIndicator::new(3);
        assert_eq!(partial.label(), "3/10");
        assert_eq!(partial.percent(), 30);

        let full = CapacityIndicator::new(MAX_TASKS);
        assert_eq!(full.percent(), 100);
        assert!(full.is_full());
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let view = TaskListView {
            capacity: CapacityIndicator::new(0),
            groups: group_by_category(&[], &[Category::Work]),
            is_empty: true,
        };
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["isEmpty"], true);
        assert_eq!(json["capacity"]["max"], 10);
        assert_eq!(json["groups"][0]["category"], "work");
        assert_eq!(json["groups"][0]["emoji"], "📋");
    }
}
