mod inquiry;
mod project;
mod project_draft;
