pub(crate) mod delete_file;
