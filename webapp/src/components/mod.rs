mod copy_block;
mod fade;
mod footer;
mod icon;
mod project_card;
mod rich;
mod section;
mod smart_link;

pub use copy_block::CopyBlock;
pub use fade::FadeIn;
pub use footer::Footer;
pub use icon::Icon;
pub use project_card::{ProjectCard, SiteCard};
pub use rich::{InlineRun, RichBlocks};
pub use section::{Section, SectionChannel, use_section_channel};
pub use smart_link::SmartLink;
