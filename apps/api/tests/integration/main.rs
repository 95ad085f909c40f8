mod helpers;
mod test_browse;
