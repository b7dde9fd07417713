//! Slack message formatting for tasks.
//!
//! Pure string builders; all store access happens in the dispatcher.

use super::{Task, TaskStatus};

/// Render the full task detail block.
pub fn task_detail(task: &Task) -> String {
    let mut out = format!("✅ **Task Created:** {}\n", task.title);
    out.push_str(&format!("📝 **ID:** {}\n", task.id));

    if let Some(description) = &task.description {
        out.push_str(&format!("📋 **Description:** {}\n", description));
    }

    if let Some(deadline) = &task.deadline {
        out.push_str(&format!(
            "⏰ **Deadline:** {}\n",
            deadline.format("%Y-%m-%d %H:%M")
        ));
    }

    out.push_str(&format!("📊 **Status:** {}\n", task.status.label()));
    out.push_str(&format!(
        "🕐 **Created:** {}",
        task.created_at.format("%Y-%m-%d %H:%M")
    ));

    out
}

/// Render a user's task listing. `indexed` is the total number of ids in the
/// user's index; `tasks` are the ones that still exist in the store.
pub fn task_list(indexed: usize, tasks: &[Task]) -> String {
    if indexed == 0 {
        return "📭 You don't have any tasks yet! Use `/task create <task description>` to create one."
            .to_string();
    }

    let mut out = format!("📋 **Your Tasks ({}):**\n\n", indexed);

    for task in tasks {
        out.push_str(&format!(
            "{} **{}** - {}",
            task.status.icon(),
            task.id,
            task.title
        ));
        if let Some(deadline) = &task.deadline {
            out.push_str(&format!(" (Due: {})", deadline.format("%m/%d")));
        }
        out.push('\n');
    }

    out.push_str(
        "\n💡 Use `/task show <task_id>` to see details or `/task update <task_id> <status>` to update status.",
    );
    out
}

/// Status-change confirmation shown above the task detail.
pub fn status_confirmation(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "⏳ Task moved to pending",
        TaskStatus::InProgress => "🔄 Task is now in progress",
        TaskStatus::Completed => "🎉 Task completed!",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::extract::ParsedTask;
    use chrono::{Local, TimeZone};

    fn sample_task() -> Task {
        let mut task = Task::new(ParsedTask {
            title: "Review proposal".to_string(),
            description: Some("Check the budget section".to_string()),
            deadline: Some(Local.with_ymd_and_hms(2024, 12, 25, 9, 0, 0).unwrap()),
        });
        task.id = "abc12345".to_string();
        task.created_at = Local.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap();
        task
    }

    #[test]
    fn test_task_detail_includes_all_fields() {
        let text = task_detail(&sample_task());
        assert!(text.contains("✅ **Task Created:** Review proposal"));
        assert!(text.contains("📝 **ID:** abc12345"));
        assert!(text.contains("📋 **Description:** Check the budget section"));
        assert!(text.contains("⏰ **Deadline:** 2024-12-25 09:00"));
        assert!(text.contains("📊 **Status:** Pending"));
        assert!(text.contains("🕐 **Created:** 2024-06-10 14:30"));
    }

    #[test]
    fn test_task_detail_omits_absent_fields() {
        let mut task = sample_task();
        task.description = None;
        task.deadline = None;
        let text = task_detail(&task);
        assert!(!text.contains("**Description:**"));
        assert!(!text.contains("**Deadline:**"));
    }

    #[test]
    fn test_task_list_empty_state() {
        let text = task_list(0, &[]);
        assert!(text.starts_with("📭 You don't have any tasks yet!"));
    }

    #[test]
    fn test_task_list_lines_and_footer() {
        let text = task_list(1, &[sample_task()]);
        assert!(text.contains("**Your Tasks (1):**"));
        assert!(text.contains("⏳ **abc12345** - Review proposal (Due: 12/25)"));
        assert!(text.contains("💡 Use `/task show <task_id>`"));
    }

    #[test]
    fn test_task_list_counts_dangling_ids() {
        // Index says two tasks, only one still exists.
        let text = task_list(2, &[sample_task()]);
        assert!(text.contains("**Your Tasks (2):**"));
    }
}
