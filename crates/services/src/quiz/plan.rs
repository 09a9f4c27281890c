use serde::{Deserialize, Serialize};

use quiz_core::Paging;
use quiz_core::model::{Question, QuestionId, QuestionKind};

/// Concrete widget a surface should render for one question.
///
/// Options are carried in declared order; the surface must not reorder them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum WidgetSpec {
    /// Single free-text input.
    TextInput,
    /// One checkbox per option, any number checkable.
    CheckboxGroup { options: Vec<String> },
    /// One radio button per option, mutually exclusive.
    RadioGroup { options: Vec<String> },
    /// One selectable list with every option.
    Dropdown { options: Vec<String> },
}

/// Rendering instruction for one question on the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderInstruction {
    pub question: QuestionId,
    /// 1-based position in the whole bank, shown next to the prompt.
    pub number: usize,
    pub prompt: String,
    pub widget: WidgetSpec,
}

/// Everything a surface needs to replace its content for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PagePlan {
    pub page: usize,
    pub page_count: usize,
    pub instructions: Vec<RenderInstruction>,
}

impl PagePlan {
    /// Number of questions on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

fn widget_for(question: &Question) -> WidgetSpec {
    let options = question.options().to_vec();
    match question.kind() {
        QuestionKind::FreeText => WidgetSpec::TextInput,
        QuestionKind::MultiSelect => WidgetSpec::CheckboxGroup { options },
        QuestionKind::SingleSelect => WidgetSpec::RadioGroup { options },
        QuestionKind::Dropdown => WidgetSpec::Dropdown { options },
    }
}

/// Build the declarative plan for `page`: one instruction per question in the
/// page's index range, in bank order.
#[must_use]
pub fn plan_page(questions: &[Question], paging: Paging, page: usize) -> PagePlan {
    let instructions = paging
        .range(page)
        .filter_map(|index| questions.get(index).map(|question| (index, question)))
        .map(|(index, question)| RenderInstruction {
            question: question.id(),
            number: index + 1,
            prompt: question.prompt().to_string(),
            widget: widget_for(question),
        })
        .collect();

    PagePlan {
        page,
        page_count: paging.page_count(),
        instructions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::default_bank;

    #[test]
    fn plan_slices_the_bank_in_order() {
        let bank = default_bank();
        let paging = Paging::new(2, bank.len()).unwrap();

        let plan = plan_page(&bank, paging, 1);

        assert_eq!(plan.page, 1);
        assert_eq!(plan.page_count, 3);
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.instructions[0].number, 3);
        assert_eq!(plan.instructions[1].number, 4);
        assert_eq!(plan.instructions[0].question, bank[2].id());
    }

    #[test]
    fn final_page_holds_the_remainder() {
        let bank = default_bank();
        let paging = Paging::new(2, bank.len()).unwrap();

        let plan = plan_page(&bank, paging, 2);

        assert_eq!(plan.len(), 1);
        assert_eq!(plan.instructions[0].number, 5);
    }

    #[test]
    fn widgets_match_question_kinds() {
        let bank = default_bank();
        let paging = Paging::new(5, bank.len()).unwrap();

        let plan = plan_page(&bank, paging, 0);

        assert_eq!(plan.instructions[0].widget, WidgetSpec::TextInput);
        assert!(matches!(
            &plan.instructions[1].widget,
            WidgetSpec::CheckboxGroup { options } if options.len() == 4
        ));
        assert!(matches!(plan.instructions[2].widget, WidgetSpec::RadioGroup { .. }));
        assert!(matches!(
            &plan.instructions[3].widget,
            WidgetSpec::Dropdown { options } if options[2] == "Jupiter"
        ));
    }
}
